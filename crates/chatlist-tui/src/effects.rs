//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O only; the reducer never touches the store itself.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// (Re)load the thread list from the store. The result comes back
    /// tagged with `generation` so stale loads can be dropped.
    LoadThreads { generation: u64 },

    /// Create a thread with the default name.
    CreateThread,

    /// Delete a thread from the store.
    DeleteThread { thread_id: String },
}
