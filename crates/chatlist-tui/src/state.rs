//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState          (caller-owned: threads, loading flag, active id)
//! └── list: ChatThreadsState (widget-owned: cursor, scroll, pending delete)
//! ```
//!
//! The split lets the reducer build a `ChatThreads` from `&app.tui` while
//! handing `&mut app.list` to its input handlers.

use chatlist_core::Thread;
use ratatui::layout::Rect;

use crate::common::LinkComponent;
use crate::effects::UiEffect;
use crate::features::threads::{ChatThreads, ChatThreadsProps, ChatThreadsState, ThreadsDisplay};
use crate::render;
use crate::route::Route;

/// One-line message shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

pub struct AppState {
    pub tui: TuiState,
    pub list: ChatThreadsState,
}

impl AppState {
    pub fn new(active_thread_id: Option<String>, display: ThreadsDisplay) -> Self {
        Self {
            tui: TuiState::new(active_thread_id, display),
            list: ChatThreadsState::new(),
        }
    }
}

/// State owned by the host of the thread list.
pub struct TuiState {
    /// Threads as stored, oldest first.
    pub threads: Vec<Thread>,
    /// True until the first load completes. Later reloads run in the
    /// background and keep the current list on screen.
    pub is_loading: bool,
    /// Thread currently open.
    pub active_thread_id: Option<String>,
    pub display: ThreadsDisplay,
    /// Show each row's navigation target next to it.
    pub show_link_targets: bool,
    pub status: Option<StatusMessage>,
    /// A create request is in flight.
    pub creating: bool,
    /// Generation of the newest load request. Results from older requests
    /// are dropped.
    pub load_generation: u64,
    pub terminal_size: (u16, u16),
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(active_thread_id: Option<String>, display: ThreadsDisplay) -> Self {
        Self {
            threads: Vec::new(),
            is_loading: true,
            active_thread_id,
            display,
            show_link_targets: false,
            status: None,
            creating: false,
            load_generation: 0,
            terminal_size: (0, 0),
            should_quit: false,
        }
    }

    /// Starts a new load request, superseding any still in flight.
    pub fn begin_load(&mut self) -> UiEffect {
        self.load_generation += 1;
        UiEffect::LoadThreads {
            generation: self.load_generation,
        }
    }

    /// Builds the thread list widget over the current state.
    pub fn threads_widget<'a, L>(&'a self, link: &'a L) -> ChatThreads<'a, L>
    where
        L: LinkComponent<Target = Route>,
    {
        ChatThreads::new(
            link,
            ChatThreadsProps {
                compute_new_thread_link: &Route::new_thread,
                compute_thread_link: &Route::thread,
                threads: &self.threads,
                is_loading: self.is_loading,
                thread_id: self.active_thread_id.as_deref().unwrap_or(""),
            },
        )
        .display(self.display)
    }

    /// Area the thread list occupies for the last known terminal size.
    pub fn list_area(&self) -> Rect {
        let (width, height) = self.terminal_size;
        render::main_layout(Rect::new(0, 0, width, height)).list
    }

    /// Selectable rows: "New Chat" plus one per thread.
    pub fn row_count(&self) -> usize {
        1 + self.threads.len()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "status error");
        self.status = Some(StatusMessage::Error(message));
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Info(message.into()));
    }
}
