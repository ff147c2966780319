//! Thread title resolution.
//!
//! Threads created without a title are named `"New Thread <ISO-8601 UTC>"`.
//! Those names carry no information for the reader, so they are shown as a
//! fixed label instead of the raw timestamp.

use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;

/// Prefix of system-assigned thread names.
pub const DEFAULT_TITLE_PREFIX: &str = "New Thread ";

/// Label shown in place of a system-assigned name.
pub const DEFAULT_TITLE_FALLBACK: &str = "Chat from";

// ASCII classes on purpose: `\d` would also match non-ASCII digits.
static DEFAULT_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^New Thread [0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?Z$",
    )
    .expect("default thread name pattern is valid")
});

/// Returns true if `name` is a system-assigned default thread name.
pub fn is_default_thread_name(name: &str) -> bool {
    DEFAULT_NAME_PATTERN.is_match(name)
}

/// Builds the default name for a thread created at `now`.
///
/// Millisecond precision with a `Z` suffix, so the result always satisfies
/// [`is_default_thread_name`].
pub fn default_thread_name(now: DateTime<Utc>) -> String {
    format!(
        "{DEFAULT_TITLE_PREFIX}{}",
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// What to show in a thread's title slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadTitle<'a> {
    /// No title: the slot is omitted entirely.
    Hidden,
    /// System-assigned name, shown as [`DEFAULT_TITLE_FALLBACK`].
    Fallback,
    /// A real title, shown verbatim (display may truncate it).
    Custom(&'a str),
}

impl<'a> ThreadTitle<'a> {
    pub fn resolve(title: Option<&'a str>) -> Self {
        match title {
            None | Some("") => ThreadTitle::Hidden,
            Some(name) if is_default_thread_name(name) => ThreadTitle::Fallback,
            Some(name) => ThreadTitle::Custom(name),
        }
    }

    /// Text for the title slot, or `None` when the slot is omitted.
    pub fn label(self) -> Option<&'a str> {
        match self {
            ThreadTitle::Hidden => None,
            ThreadTitle::Fallback => Some(DEFAULT_TITLE_FALLBACK),
            ThreadTitle::Custom(name) => Some(name),
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, ThreadTitle::Fallback)
    }
}
