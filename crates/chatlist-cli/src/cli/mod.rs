//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chatlist_core::config::{self, Config};
use chatlist_core::logging;
use chatlist_core::store::ThreadStore;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "chatlist")]
#[command(version)]
#[command(about = "Browse, create and delete chat threads")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Thread store to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    threads_file: Option<PathBuf>,

    #[command(flatten)]
    browse_args: BrowseArgs,
}

#[derive(clap::Args, Debug, Clone, Default)]
struct BrowseArgs {
    /// Mark a thread as open on start
    #[arg(long, value_name = "ID")]
    thread: Option<String>,

    /// Show each row's navigation target
    #[arg(long)]
    show_targets: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive thread browser (default)
    Browse {
        #[command(flatten)]
        args: BrowseArgs,
    },

    /// Manage saved threads
    Threads {
        #[command(subcommand)]
        command: ThreadCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ThreadCommands {
    /// Lists saved threads, newest first
    List,
    /// Creates a thread
    New {
        /// Title for the thread (defaults to a timestamped name)
        #[arg(long)]
        title: Option<String>,
    },
    /// Renames a thread
    Rename {
        /// The ID of the thread to rename
        #[arg(value_name = "THREAD_ID")]
        id: String,
        /// New title for the thread
        #[arg(value_name = "TITLE")]
        title: String,
    },
    /// Deletes a thread
    Delete {
        /// The ID of the thread to delete
        #[arg(value_name = "THREAD_ID")]
        id: String,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logging is best effort: a read-only home should not block the CLI.
    let _log_guard = match logging::init(&config::paths::logs_dir()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        threads_file,
        browse_args,
    } = cli;

    match command {
        None => {
            let (config, store) = load_store(threads_file)?;
            commands::browse::run(&config, store, browse_args).await
        }
        Some(Commands::Browse { args }) => {
            let (config, store) = load_store(threads_file)?;
            commands::browse::run(&config, store, args).await
        }

        Some(Commands::Threads { command }) => {
            let (config, store) = load_store(threads_file)?;
            match command {
                ThreadCommands::List => commands::threads::list(&store, &config),
                ThreadCommands::New { title } => commands::threads::create(&store, &config, title),
                ThreadCommands::Rename { id, title } => {
                    commands::threads::rename(&store, &id, &title)
                }
                ThreadCommands::Delete { id } => commands::threads::delete(&store, &id),
            }
        }

        // Config commands never load the config, so they work on a broken file.
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

/// Loads the config and opens the thread store it points at.
fn load_store(threads_file: Option<PathBuf>) -> Result<(Config, ThreadStore)> {
    let mut config = Config::load().context("load config")?;
    if let Some(path) = threads_file {
        config.threads_file = Some(path);
    }
    let store = ThreadStore::new(config.threads_path());
    tracing::debug!(path = %store.path().display(), "using thread store");
    Ok((config, store))
}
