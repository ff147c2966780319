//! Thread list local state.
//!
//! Everything here is ephemeral UI state owned by the widget. The threads
//! themselves, the loading flag, and the active thread id belong to the
//! host and arrive as props on every frame.

use crate::overlays::DialogButton;

/// Which thread, if any, is awaiting delete confirmation.
///
/// The confirmation dialog is open exactly when this is `Pending`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteTarget {
    #[default]
    Idle,
    Pending(String),
}

impl DeleteTarget {
    pub fn is_pending(&self) -> bool {
        matches!(self, DeleteTarget::Pending(_))
    }

    pub fn thread_id(&self) -> Option<&str> {
        match self {
            DeleteTarget::Idle => None,
            DeleteTarget::Pending(id) => Some(id),
        }
    }

    /// Returns the pending id and resets to `Idle`.
    pub fn take(&mut self) -> Option<String> {
        match std::mem::take(self) {
            DeleteTarget::Idle => None,
            DeleteTarget::Pending(id) => Some(id),
        }
    }
}

/// Local state of the thread list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatThreadsState {
    pub delete_target: DeleteTarget,
    /// Focused dialog button while a delete is pending.
    pub dialog_focus: DialogButton,
    /// Cursor row. Row 0 is "New Chat", row `n` is the n-th newest thread.
    pub selected: usize,
    /// First visible row.
    pub offset: usize,
}

impl ChatThreadsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages `thread_id` for deletion, replacing any previous target.
    pub fn request_delete(&mut self, thread_id: String) {
        tracing::debug!(thread_id = %thread_id, "delete requested");
        self.delete_target = DeleteTarget::Pending(thread_id);
        self.dialog_focus = DialogButton::Cancel;
    }

    /// Clears the pending target without side effects.
    pub fn dismiss_delete(&mut self) {
        if let Some(thread_id) = self.delete_target.take() {
            tracing::debug!(thread_id = %thread_id, "delete dismissed");
        }
        self.dialog_focus = DialogButton::Cancel;
    }

    /// Moves the cursor by `delta` rows, clamped to `[0, row_count)`.
    pub fn move_selection(&mut self, delta: isize, row_count: usize) {
        let last = row_count.saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    pub fn select(&mut self, row: usize, row_count: usize) {
        self.selected = row.min(row_count.saturating_sub(1));
    }

    /// Keeps the cursor inside the list after it shrinks.
    pub fn clamp(&mut self, row_count: usize) {
        self.select(self.selected, row_count);
        self.offset = self.offset.min(self.selected);
    }

    /// Adjusts `offset` so the cursor is inside a window of `visible_rows`.
    pub fn ensure_visible(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible_rows {
            self.offset = self.selected + 1 - visible_rows;
        }
    }
}
