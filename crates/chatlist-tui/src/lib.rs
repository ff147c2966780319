//! Terminal chat thread browser.
//!
//! The reusable piece is the thread list widget in [`features::threads`];
//! the rest of the crate is the host that feeds it from a
//! [`ThreadStore`](chatlist_core::store::ThreadStore).

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod route;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use chatlist_core::config::Config;
use chatlist_core::store::ThreadStore;
pub use features::threads;
pub use route::Route;
pub use runtime::TuiRuntime;

use crate::state::AppState;
use crate::features::threads::ThreadsDisplay;

/// Options for [`run_thread_browser`].
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    /// Thread to mark as open on start.
    pub thread_id: Option<String>,
    /// Show each row's navigation target.
    pub show_link_targets: bool,
}

/// Runs the interactive thread browser.
///
/// Returns the id of the thread open when the user quit, if any.
pub async fn run_thread_browser(
    config: &Config,
    store: ThreadStore,
    options: BrowseOptions,
) -> Result<Option<String>> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The thread browser requires a terminal.\n\
             Use `chatlist threads list` for non-interactive output."
        );
    }

    let display = ThreadsDisplay {
        time_zone: config.time_zone,
        title_max_width: config.title_max_width,
    };
    let mut state = AppState::new(options.thread_id, display);
    state.tui.show_link_targets = options.show_link_targets;

    tracing::info!(path = %store.path().display(), "starting thread browser");
    let mut runtime = TuiRuntime::new(state, store, config.resource_id.clone())?;
    runtime.run()?;

    Ok(runtime.state.tui.active_thread_id.take())
}
