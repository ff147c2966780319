//! Chat thread list.
//!
//! A sidebar-style list: a "New Chat" link first, then every thread newest
//! first, each with its creation date and a delete trigger. Deleting asks for
//! confirmation through [`crate::overlays::DeleteThreadDialog`] and reports
//! the confirmed id to the host as [`ThreadsEvent::Delete`].
//!
//! The widget is split the usual way:
//! - `view`: props and the pure view model
//! - `state`: local UI state
//! - `render`: drawing and hit-testing
//! - `update`: key/mouse handling

mod render;
mod skeleton;
mod state;
mod update;
mod view;

pub use render::{DELETE_TRIGGER_WIDTH, EMPTY_STATE_MESSAGE, NEW_CHAT_LABEL, RowHit, hit_test};
pub use skeleton::{SKELETON_BARS, render_skeleton};
pub use state::{ChatThreadsState, DeleteTarget};
pub use update::ThreadsEvent;
pub use view::{
    ChatThreads, ChatThreadsProps, ThreadEntry, ThreadListEntry, ThreadListView, ThreadsDisplay,
    ThreadsView,
};
