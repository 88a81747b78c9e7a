//! # Data Model
//!
//! A [`Snippet`] is the only entity. It is stored and exported with camelCase
//! keys (`id`, `text`, `tags`, `pinned`, `createdAt`, `updatedAt`) and RFC 3339
//! timestamps, which is also the layout of the backup files the import merger
//! reads.
//!
//! Ids are opaque strings. Snippets created here get a UUID v4, but imported
//! ids are kept verbatim, so nothing may assume an id parses as a UUID.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Snippet {
    /// Builds a snippet stamped with the current time. Fields are taken as-is;
    /// callers normalize text and tags first.
    pub fn new(id: String, text: String, tags: Vec<String>, pinned: bool) -> Self {
        let now = Utc::now();
        Self {
            id,
            text,
            tags,
            pinned,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refreshes `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// First characters of the id, as shown in listings.
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }
}

/// Length of the id prefix shown in listings.
pub const SHORT_ID_LEN: usize = 8;

pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub pinned: usize,
}

impl Stats {
    pub fn of(items: &[Snippet]) -> Self {
        Self {
            total: items.len(),
            pinned: items.iter().filter(|s| s.pinned).count(),
        }
    }
}

/// Both fields of an edit, applied together or not at all. `tags_raw: None`
/// leaves the stored tags exactly as they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub text: String,
    pub tags_raw: Option<String>,
}

impl EditRequest {
    pub fn new(text: impl Into<String>, tags_raw: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags_raw: Some(tags_raw.into()),
        }
    }

    pub fn keep_tags(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags_raw: None,
        }
    }
}

/// Source of fresh snippet ids.
pub trait IdGenerator {
    fn new_id(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic ids (`id-1`, `id-2`, ...) for tests.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: std::cell::Cell<usize>,
}

#[cfg(any(test, feature = "test_utils"))]
impl IdGenerator for SequentialIds {
    fn new_id(&self) -> String {
        let n = self.next.get() + 1;
        self.next.set(n);
        format!("id-{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_snippet_has_equal_timestamps() {
        let s = Snippet::new("a".into(), "text".into(), vec![], false);
        assert_eq!(s.created_at, s.updated_at);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let s = Snippet::new("a".into(), "text".into(), vec!["x".into()], true);
        let value = serde_json::to_value(&s).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["pinned"], json!(true));
        assert_eq!(value["tags"], json!(["x"]));
    }

    #[test]
    fn deserializes_browser_backup_records() {
        let value = json!({
            "id": "lx3k9a-abc123",
            "text": "hello",
            "tags": ["work"],
            "pinned": false,
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "2024-05-02T10:00:00.000Z"
        });
        let s: Snippet = serde_json::from_value(value).unwrap();
        assert_eq!(s.id, "lx3k9a-abc123");
        assert!(s.updated_at > s.created_at);
    }

    #[test]
    fn short_id_handles_short_ids() {
        let mut s = Snippet::new("abc".into(), "t".into(), vec![], false);
        assert_eq!(s.short_id(), "abc");
        s.id = "0123456789".into();
        assert_eq!(s.short_id(), "01234567");
    }

    #[test]
    fn stats_count_pinned() {
        let mut a = Snippet::new("a".into(), "a".into(), vec![], true);
        let b = Snippet::new("b".into(), "b".into(), vec![], false);
        assert_eq!(Stats::of(&[a.clone(), b.clone()]), Stats { total: 2, pinned: 1 });
        a.pinned = false;
        assert_eq!(Stats::of(&[a, b]), Stats { total: 2, pinned: 0 });
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIds::default();
        assert_eq!(ids.new_id(), "id-1");
        assert_eq!(ids.new_id(), "id-2");
    }
}
