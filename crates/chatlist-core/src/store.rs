//! JSON-file thread store.
//!
//! The file holds a JSON array of [`Thread`] records, oldest first. Every
//! mutation rewrites the whole file through a uniquely named temporary
//! sibling and a rename, so readers never observe a half-written store.
//!
//! Operations on one store (and its clones) run one at a time: each
//! load-modify-save holds the store lock for its whole duration.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::thread::Thread;
use crate::title::default_thread_name;

/// Thread store backed by a single JSON file.
///
/// Clones share the lock. Separate `ThreadStore::new` calls on the same path
/// do not.
#[derive(Debug, Clone)]
pub struct ThreadStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl ThreadStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all threads, oldest first. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Thread>> {
        let _guard = self.lock();
        self.read()
    }

    /// Replaces the stored threads.
    pub fn save(&self, threads: &[Thread]) -> Result<()> {
        let _guard = self.lock();
        self.write(threads)
    }

    /// Appends a new thread and returns it.
    ///
    /// Without a title the thread gets the system default name
    /// (`"New Thread <timestamp>"`).
    pub fn create(&self, title: Option<String>, resource_id: &str) -> Result<Thread> {
        let mut thread = Thread::new(None);
        thread.title = Some(
            title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| default_thread_name(thread.created_at)),
        );
        thread.resource_id = resource_id.to_string();

        let _guard = self.lock();
        let mut threads = self.read()?;
        threads.push(thread.clone());
        self.write(&threads)?;

        tracing::info!(thread_id = %thread.id, "created thread");
        Ok(thread)
    }

    /// Sets a thread's title and bumps its update time.
    pub fn rename(&self, thread_id: &str, title: &str) -> Result<Thread> {
        let _guard = self.lock();
        let mut threads = self.read()?;
        let Some(thread) = threads.iter_mut().find(|t| t.id == thread_id) else {
            anyhow::bail!("Thread not found: {thread_id}");
        };
        thread.title = Some(title.to_string());
        thread.updated_at = Some(chrono::Utc::now());
        let renamed = thread.clone();

        self.write(&threads)?;
        tracing::info!(thread_id, "renamed thread");
        Ok(renamed)
    }

    /// Removes a thread. Returns `false` if no thread had that id.
    pub fn delete(&self, thread_id: &str) -> Result<bool> {
        let _guard = self.lock();
        let mut threads = self.read()?;
        let before = threads.len();
        threads.retain(|t| t.id != thread_id);
        if threads.len() == before {
            tracing::warn!(thread_id, "delete requested for unknown thread");
            return Ok(false);
        }

        self.write(&threads)?;
        tracing::info!(thread_id, "deleted thread");
        Ok(true)
    }

    // The guarded data is `()`, so a poisoned lock carries no broken state.
    fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> Result<Vec<Thread>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read threads from {}", self.path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let threads: Vec<Thread> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse threads from {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), count = threads.len(), "loaded threads");
        Ok(threads)
    }

    fn write(&self, threads: &[Thread]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;

        let json = serde_json::to_string_pretty(threads).context("Failed to serialize threads")?;
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        tmp.write_all(json.as_bytes())
            .with_context(|| format!("Failed to write threads to {}", tmp.path().display()))?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}
