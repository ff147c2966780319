//! Modal overlays.
//!
//! - `delete_thread.rs`: delete confirmation dialog
//! - `render_utils.rs`: shared rendering helpers for overlays and hint bars

pub mod delete_thread;
pub mod render_utils;

pub use delete_thread::{DeleteThreadDialog, DialogButton, DialogEvent, DialogLayout};
