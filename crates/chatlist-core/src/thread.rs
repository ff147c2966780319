//! Thread data model.
//!
//! Field names follow the storage record (`camelCase` on disk) so thread
//! files written by other tools load unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted conversation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: String,

    /// User-visible title. `None` until one is assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Resource (agent, workspace, ...) that owns the thread.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_id: String,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Thread {
    /// Creates a thread with a fresh v4 id, created now.
    pub fn new(title: Option<String>) -> Self {
        Self::new_at(uuid::Uuid::new_v4().to_string(), title, Utc::now())
    }

    /// Creates a thread with an explicit id and creation time.
    pub fn new_at(id: impl Into<String>, title: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title,
            resource_id: String::new(),
            created_at,
            updated_at: None,
            metadata: None,
        }
    }
}

/// Returns the threads newest first (reverse of the supplied order).
///
/// The input is expected oldest first, as stored. It is not mutated.
pub fn newest_first(threads: &[Thread]) -> Vec<&Thread> {
    threads.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_newest_first_reverses_without_mutating() {
        let threads = vec![
            Thread::new_at("a", None, at(0)),
            Thread::new_at("b", None, at(1)),
            Thread::new_at("c", None, at(2)),
        ];

        let ids: Vec<&str> = newest_first(&threads).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
        assert_eq!(threads[0].id, "a");
    }

    #[test]
    fn test_newest_first_empty() {
        assert!(newest_first(&[]).is_empty());
    }

    #[test]
    fn test_deserializes_camel_case_record() {
        let json = r#"{
            "id": "t1",
            "title": "Quarterly Planning",
            "resourceId": "agent-1",
            "createdAt": "2024-03-07T15:04:05Z",
            "updatedAt": "2024-03-08T09:00:00Z",
            "metadata": {"pinned": true}
        }"#;
        let thread: Thread = serde_json::from_str(json).unwrap();
        assert_eq!(thread.id, "t1");
        assert_eq!(thread.title.as_deref(), Some("Quarterly Planning"));
        assert_eq!(thread.resource_id, "agent-1");
        assert_eq!(
            thread.updated_at.map(|t| t.to_rfc3339()).as_deref(),
            Some("2024-03-08T09:00:00+00:00")
        );
        assert_eq!(thread.metadata.unwrap()["pinned"], true);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"id": "t2", "createdAt": "2024-03-07T15:04:05.250Z"}"#;
        let thread: Thread = serde_json::from_str(json).unwrap();
        assert_eq!(thread.title, None);
        assert!(thread.resource_id.is_empty());
        assert_eq!(thread.updated_at, None);

        let out = serde_json::to_string(&thread).unwrap();
        assert!(!out.contains("title"));
        assert!(!out.contains("resourceId"));
        assert!(out.contains("createdAt"));
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = Thread::new(None);
        let b = Thread::new(None);
        assert_ne!(a.id, b.id);
    }
}
