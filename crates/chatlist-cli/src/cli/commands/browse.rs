//! Browse command handler.

use anyhow::{Context, Result};
use chatlist_core::config::Config;
use chatlist_core::store::ThreadStore;

use crate::cli::BrowseArgs;
use crate::modes::{self, BrowseOptions};

pub async fn run(config: &Config, store: ThreadStore, args: BrowseArgs) -> Result<()> {
    let options = BrowseOptions {
        thread_id: args.thread,
        show_link_targets: args.show_targets,
    };

    let opened = modes::run_thread_browser(config, store, options)
        .await
        .context("thread browser failed")?;

    if let Some(thread_id) = opened {
        println!("{thread_id}");
    }
    Ok(())
}
