//! Issue records as returned by the GitHub REST API, and their persisted projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An issue fetched from the source repository.
///
/// `id` is the global GitHub identifier and the dedup key. `number` and
/// `title` are only used for display. Every other field of the payload is
/// kept in `extra` so the JSON snapshot store can write it back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub number: i64,
    pub title: String,
    pub html_url: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Issue {
    pub fn new(id: i64, number: i64, title: impl Into<String>, html_url: impl Into<String>) -> Self {
        Self {
            id,
            number,
            title: title.into(),
            html_url: html_url.into(),
            extra: Map::new(),
        }
    }
}

/// Minimal record of an issue that has already been announced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeenRecord {
    pub id: i64,
    pub number: i64,
    /// When the record was stored. Only the relational store tracks this.
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Issue> for SeenRecord {
    fn from(issue: &Issue) -> Self {
        Self {
            id: issue.id,
            number: issue.number,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_unknown_fields_for_dedup() {
        let payload = r#"{
            "url": "https://api.github.com/repos/vim-jp/issues/issues/42",
            "id": 5,
            "number": 42,
            "title": "fix parser crash",
            "html_url": "https://x/42",
            "user": {"login": "mattn", "id": 10111},
            "state": "open"
        }"#;

        let issue: Issue = serde_json::from_str(payload).unwrap();
        assert_eq!(issue.id, 5);
        assert_eq!(issue.number, 42);
        assert_eq!(issue.title, "fix parser crash");
        assert_eq!(issue.html_url, "https://x/42");
        assert_eq!(issue.extra["state"], "open");
        assert_eq!(issue.extra["user"]["login"], "mattn");
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let payload = serde_json::json!({
            "id": 7,
            "number": 3,
            "title": "t",
            "html_url": "https://x/3",
            "labels": [{"name": "bug"}],
            "comments": 2
        });

        let issue: Issue = serde_json::from_value(payload.clone()).unwrap();
        let encoded = serde_json::to_value(&issue).unwrap();
        assert_eq!(encoded, payload);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let payload = r#"{"id": 1, "number": 1, "title": "no url"}"#;
        assert!(serde_json::from_str::<Issue>(payload).is_err());
    }

    #[test]
    fn test_seen_record_projection() {
        let issue = Issue::new(5, 42, "fix parser crash", "https://x/42");
        let record = SeenRecord::from(&issue);
        assert_eq!(record.id, 5);
        assert_eq!(record.number, 42);
        assert!(record.created_at.is_none());
    }
}
