//! Thread list props and the derived view model.
//!
//! `ChatThreads::view` is the pure mapping from props + local state to what
//! gets drawn. Rendering and input handling both read from it, so the order
//! and activity rules live in one place.

use chatlist_core::format::DisplayZone;
use chatlist_core::thread::{Thread, newest_first};
use chatlist_core::title::ThreadTitle;

use super::state::ChatThreadsState;
use crate::common::LinkComponent;
use crate::overlays::DeleteThreadDialog;

/// Inputs supplied by the host on every frame.
pub struct ChatThreadsProps<'a, T> {
    /// Target for starting a new conversation.
    pub compute_new_thread_link: &'a dyn Fn() -> T,
    /// Target for an existing thread.
    pub compute_thread_link: &'a dyn Fn(&str) -> T,
    /// Threads as stored, oldest first.
    pub threads: &'a [Thread],
    pub is_loading: bool,
    /// Id of the thread currently open in the host.
    pub thread_id: &'a str,
}

/// Presentation options that do not change what is shown, only how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadsDisplay {
    pub time_zone: DisplayZone,
    pub title_max_width: usize,
}

impl Default for ThreadsDisplay {
    fn default() -> Self {
        Self {
            time_zone: DisplayZone::default(),
            title_max_width: 28,
        }
    }
}

/// The thread list widget.
pub struct ChatThreads<'a, L: LinkComponent> {
    pub(crate) link: &'a L,
    pub(crate) props: ChatThreadsProps<'a, L::Target>,
    pub(crate) display: ThreadsDisplay,
}

/// What the widget shows for the current props and state.
#[derive(Debug, Clone)]
pub enum ThreadsView<'a, T> {
    /// Only the skeleton placeholder.
    Loading,
    Ready(ThreadListView<'a, T>),
}

#[derive(Debug, Clone)]
pub struct ThreadListView<'a, T> {
    pub entries: Vec<ThreadListEntry<'a, T>>,
    pub dialog: DeleteThreadDialog,
}

#[derive(Debug, Clone)]
pub enum ThreadListEntry<'a, T> {
    NewChat { target: T },
    /// Shown in place of thread entries when there are none.
    Empty,
    Thread(ThreadEntry<'a, T>),
}

#[derive(Debug, Clone)]
pub struct ThreadEntry<'a, T> {
    pub thread_id: &'a str,
    pub target: T,
    pub title: ThreadTitle<'a>,
    /// Creation time, already formatted for display.
    pub created: String,
    pub is_active: bool,
}

impl<'a, L: LinkComponent> ChatThreads<'a, L> {
    pub fn new(link: &'a L, props: ChatThreadsProps<'a, L::Target>) -> Self {
        Self {
            link,
            props,
            display: ThreadsDisplay::default(),
        }
    }

    #[must_use]
    pub fn display(mut self, display: ThreadsDisplay) -> Self {
        self.display = display;
        self
    }

    pub fn is_loading(&self) -> bool {
        self.props.is_loading
    }

    /// Number of selectable rows: "New Chat" plus one per thread.
    pub fn row_count(&self) -> usize {
        1 + self.props.threads.len()
    }

    /// Thread shown on `row` (row 1 is the newest thread).
    pub fn thread_at_row(&self, row: usize) -> Option<&'a Thread> {
        let threads = self.props.threads;
        let index = row.checked_sub(1)?;
        threads.len().checked_sub(index + 1).map(|i| &threads[i])
    }

    /// Link target of `row`.
    pub fn target_for_row(&self, row: usize) -> Option<L::Target> {
        if row == 0 {
            return Some((self.props.compute_new_thread_link)());
        }
        self.thread_at_row(row)
            .map(|thread| (self.props.compute_thread_link)(&thread.id))
    }

    pub fn view(&self, state: &ChatThreadsState) -> ThreadsView<'a, L::Target> {
        if self.props.is_loading {
            return ThreadsView::Loading;
        }

        let display_threads = newest_first(self.props.threads);
        let mut entries = Vec::with_capacity(display_threads.len() + 1);
        entries.push(ThreadListEntry::NewChat {
            target: (self.props.compute_new_thread_link)(),
        });

        if display_threads.is_empty() {
            entries.push(ThreadListEntry::Empty);
        }

        entries.extend(display_threads.into_iter().map(|thread| {
            ThreadListEntry::Thread(ThreadEntry {
                thread_id: thread.id.as_str(),
                target: (self.props.compute_thread_link)(&thread.id),
                title: ThreadTitle::resolve(thread.title.as_deref()),
                created: self.display.time_zone.format_day(thread.created_at),
                is_active: thread.id == self.props.thread_id,
            })
        }));

        ThreadsView::Ready(ThreadListView {
            entries,
            dialog: DeleteThreadDialog::new(state.delete_target.is_pending())
                .with_focus(state.dialog_focus),
        })
    }
}
