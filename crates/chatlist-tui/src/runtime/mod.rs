//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! All side effects happen here. The reducer stays pure and produces
//! effects; this module executes them.
//!
//! Async results come back through an inbox: handlers send `UiEvent`s to
//! `inbox_tx`, and the loop drains `inbox_rx` once per frame.
//!
//! - `mod.rs`: `TuiRuntime`, event loop, effect dispatch
//! - `inbox.rs`: inbox channel types
//! - `handlers.rs`: store operations run off the render loop

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use chatlist_core::store::ThreadStore;
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll timeout; bounds how long an inbox result waits to be drawn.
pub const POLL_DURATION: Duration = Duration::from_millis(50);

/// Full-screen TUI runtime.
///
/// Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    store: ThreadStore,
    /// Stamped on threads created from the browser.
    resource_id: String,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
}

impl TuiRuntime {
    pub fn new(state: AppState, store: ThreadStore, resource_id: String) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            store,
            resource_id,
            inbox_tx,
            inbox_rx,
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        let load = self.state.tui.begin_load();
        self.execute_effect(load);
        let result = self.event_loop();

        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let mut events = self.collect_events()?;

            // Layout must be current before any input is interpreted.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if !matches!(&event, UiEvent::Frame { .. }) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Don't delay already-collected results behind a blocking poll.
        let poll_duration = if events.is_empty() {
            POLL_DURATION
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async handler and sends its result to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        tracing::debug!(?effect, "executing effect");
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::LoadThreads { generation } => {
                let store = self.store.clone();
                self.spawn_effect(move || handlers::threads_load(store, generation));
            }
            UiEffect::CreateThread => {
                let store = self.store.clone();
                let resource_id = self.resource_id.clone();
                self.spawn_effect(move || handlers::thread_create(store, resource_id));
            }
            UiEffect::DeleteThread { thread_id } => {
                let store = self.store.clone();
                self.spawn_effect(move || handlers::thread_delete(store, thread_id));
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
