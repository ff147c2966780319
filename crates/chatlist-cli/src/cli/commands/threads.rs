//! Thread command handlers.

use anyhow::{Context, Result};
use chatlist_core::config::Config;
use chatlist_core::store::ThreadStore;
use chatlist_core::thread::newest_first;
use chatlist_core::title::ThreadTitle;

pub const EMPTY_MESSAGE: &str = "No threads yet. Create one with `chatlist threads new`.";

pub fn list(store: &ThreadStore, config: &Config) -> Result<()> {
    let threads = store.load().context("list threads")?;
    if threads.is_empty() {
        println!("{EMPTY_MESSAGE}");
        return Ok(());
    }

    for thread in newest_first(&threads) {
        let title = ThreadTitle::resolve(thread.title.as_deref())
            .label()
            .unwrap_or("");
        let created = config.time_zone.format_day(thread.created_at);
        let line = format!("{}  {}  {}", thread.id, created, title);
        println!("{}", line.trim_end());
    }
    Ok(())
}

pub fn create(store: &ThreadStore, config: &Config, title: Option<String>) -> Result<()> {
    let thread = store
        .create(title, &config.resource_id)
        .context("create thread")?;
    println!("{}", thread.id);
    Ok(())
}

pub fn rename(store: &ThreadStore, id: &str, title: &str) -> Result<()> {
    let title = title.trim();
    if title.is_empty() {
        anyhow::bail!("Title cannot be empty");
    }
    store
        .rename(id, title)
        .with_context(|| format!("rename thread '{id}'"))?;
    println!("Renamed thread {id} → {title}");
    Ok(())
}

pub fn delete(store: &ThreadStore, id: &str) -> Result<()> {
    let removed = store
        .delete(id)
        .with_context(|| format!("delete thread '{id}'"))?;
    if !removed {
        anyhow::bail!("Thread not found: {id}");
    }
    println!("Deleted thread {id}");
    Ok(())
}
