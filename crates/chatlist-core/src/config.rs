//! Configuration management for chatlist.
//!
//! Loads configuration from ${CHATLIST_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::format::DisplayZone;

pub mod paths {
    //! Path resolution for chatlist configuration and data files.
    //!
    //! CHATLIST_HOME resolution order:
    //! 1. CHATLIST_HOME environment variable (if set)
    //! 2. ~/.config/chatlist (default)
    //! 3. ./.chatlist when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the chatlist home directory.
    pub fn chatlist_home() -> PathBuf {
        if let Ok(home) = std::env::var("CHATLIST_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".chatlist"),
            |h| h.join(".config").join("chatlist"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        chatlist_home().join("config.toml")
    }

    /// Returns the default path of the thread store.
    pub fn threads_path() -> PathBuf {
        chatlist_home().join("threads.json")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        chatlist_home().join("logs")
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Thread store location. `None` means [`paths::threads_path`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads_file: Option<PathBuf>,

    /// Zone used to display thread creation times.
    pub time_zone: DisplayZone,

    /// Maximum display width of a thread title, in terminal columns.
    pub title_max_width: usize,

    /// Resource id stamped on newly created threads.
    pub resource_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads_file: None,
            time_zone: DisplayZone::default(),
            title_max_width: Self::DEFAULT_TITLE_MAX_WIDTH,
            resource_id: String::new(),
        }
    }
}

impl Config {
    pub const DEFAULT_TITLE_MAX_WIDTH: usize = 28;

    /// Loads configuration from the default path.
    ///
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolved location of the thread store.
    pub fn threads_path(&self) -> PathBuf {
        self.threads_file.clone().unwrap_or_else(paths::threads_path)
    }

    /// Writes the commented default config to `path`.
    ///
    /// Fails if a file already exists there. Parent directories are created.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        write_config(path, default_config_template())
    }
}

fn write_config(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}
