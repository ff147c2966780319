//! Interactive mode, available when built with the `tui` feature.

#[cfg(feature = "tui")]
pub use chatlist_tui::{BrowseOptions, run_thread_browser};

#[cfg(not(feature = "tui"))]
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    pub thread_id: Option<String>,
    pub show_link_targets: bool,
}

#[cfg(not(feature = "tui"))]
pub async fn run_thread_browser(
    _config: &chatlist_core::config::Config,
    _store: chatlist_core::store::ThreadStore,
    _options: BrowseOptions,
) -> anyhow::Result<Option<String>> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
