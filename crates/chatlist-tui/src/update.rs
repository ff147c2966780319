//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use chatlist_core::Thread;
use chatlist_core::title::ThreadTitle;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

use crate::common::PlainLink;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::threads::ThreadsEvent;
use crate::route::Route;
use crate::state::{AppState, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Frame { width, height } => {
            app.tui.terminal_size = (width, height);
            sync_list(app);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::ThreadsLoaded { generation, result } => {
            if generation < app.tui.load_generation {
                tracing::debug!(generation, latest = app.tui.load_generation, "dropping stale load");
                return vec![];
            }
            app.tui.is_loading = false;
            match result {
                Ok(threads) => {
                    tracing::debug!(count = threads.len(), "threads loaded");
                    app.tui.threads = threads;
                    sync_list(app);
                }
                Err(error) => app.tui.set_error(error),
            }
            vec![]
        }
        UiEvent::ThreadCreated(result) => {
            app.tui.creating = false;
            match result {
                Ok(thread) => {
                    app.tui.set_info("Started a new chat");
                    app.tui.active_thread_id = Some(thread.id.clone());
                    app.tui.threads.push(thread);
                    // The new thread is the newest, shown right below "New Chat".
                    app.list.select(1, app.tui.row_count());
                    sync_list(app);
                    // Loads started before the create would drop the new thread.
                    vec![app.tui.begin_load()]
                }
                Err(error) => {
                    app.tui.set_error(error);
                    vec![app.tui.begin_load()]
                }
            }
        }
        UiEvent::ThreadDeleted { thread_id, result } => {
            match result {
                Ok(true) => {
                    if app.tui.active_thread_id.as_deref() == Some(thread_id.as_str()) {
                        app.tui.active_thread_id = None;
                    }
                    app.tui.set_info("Chat deleted");
                }
                Ok(false) => app.tui.set_error(format!("Chat {thread_id} no longer exists")),
                Err(error) => app.tui.set_error(error),
            }
            vec![app.tui.begin_load()]
        }
    }
}

/// Keeps cursor and scroll valid for the current list and viewport.
fn sync_list(app: &mut AppState) {
    app.list.clamp(app.tui.row_count());
    app.list
        .ensure_visible(usize::from(app.tui.list_area().height));
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    // A status lasts until the next key, which may set its own.
    app.tui.status = None;

    // The dialog captures every key while open.
    if !app.list.delete_target.is_pending() {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return vec![UiEffect::Quit],
            KeyCode::Char('r') if !app.tui.is_loading => {
                app.tui.set_info("Refreshing…");
                return vec![app.tui.begin_load()];
            }
            _ => {}
        }
    }

    let area = app.tui.list_area();
    let link = PlainLink::new();
    let event = app
        .tui
        .threads_widget(&link)
        .handle_key(&mut app.list, key, area);
    event
        .map(|event| handle_threads_event(&mut app.tui, event))
        .unwrap_or_default()
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    let area = app.tui.list_area();
    let link = PlainLink::new();
    let event = app
        .tui
        .threads_widget(&link)
        .handle_mouse(&mut app.list, mouse, area);
    event
        .map(|event| handle_threads_event(&mut app.tui, event))
        .unwrap_or_default()
}

fn handle_threads_event(tui: &mut TuiState, event: ThreadsEvent<Route>) -> Vec<UiEffect> {
    match event {
        ThreadsEvent::Navigate(Route::NewThread) => {
            if tui.creating {
                return vec![];
            }
            tui.creating = true;
            tui.set_info("Creating a new chat…");
            vec![UiEffect::CreateThread]
        }
        ThreadsEvent::Navigate(Route::Thread(thread_id)) => {
            let label = tui
                .threads
                .iter()
                .find(|t| t.id == thread_id)
                .map(display_label)
                .unwrap_or_else(|| thread_id.clone());
            tracing::info!(thread_id = %thread_id, "opened thread");
            tui.set_info(format!("Opened {label}"));
            tui.active_thread_id = Some(thread_id);
            vec![]
        }
        ThreadsEvent::Delete { thread_id } => {
            tui.set_info("Deleting chat…");
            vec![UiEffect::DeleteThread { thread_id }]
        }
    }
}

fn display_label(thread: &Thread) -> String {
    ThreadTitle::resolve(thread.title.as_deref())
        .label()
        .map_or_else(|| thread.id.clone(), str::to_string)
}
