//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! the per-frame size update, and results of store operations sent back
//! through the runtime inbox.

use chatlist_core::Thread;
use crossterm::event::Event;

#[derive(Debug)]
pub enum UiEvent {
    /// Current terminal size, sent before any other event of a frame.
    Frame { width: u16, height: u16 },

    /// Raw crossterm event.
    Terminal(Event),

    /// Thread list finished loading. `generation` echoes the request.
    ThreadsLoaded {
        generation: u64,
        result: Result<Vec<Thread>, String>,
    },

    /// A new thread was created in the store.
    ThreadCreated(Result<Thread, String>),

    /// A delete finished. `Ok(false)` means the id was already gone.
    ThreadDeleted {
        thread_id: String,
        result: Result<bool, String>,
    },
}
