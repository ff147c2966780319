//! Core types for chatlist: the thread model, title and date formatting,
//! the JSON thread store, configuration, and logging.

pub mod config;
pub mod format;
pub mod logging;
pub mod store;
pub mod thread;
pub mod title;

pub use format::format_day;
pub use thread::Thread;
pub use title::{ThreadTitle, is_default_thread_name};
