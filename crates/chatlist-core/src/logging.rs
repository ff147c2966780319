//! Structured logging setup.
//!
//! The browser owns the terminal, so log output goes to
//! `$CHATLIST_HOME/logs/chatlist.log` instead of stderr. `CHATLIST_LOG` takes
//! an `EnvFilter` directive string and overrides the default level.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_ENV: &str = "CHATLIST_LOG";
pub const LOG_FILE_NAME: &str = "chatlist.log";

const DEFAULT_DIRECTIVE: &str = "chatlist=info,chatlist_core=info,chatlist_tui=info";

/// Installs the global subscriber writing to `log_dir`.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the background writer.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(env_filter())
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
