//! Backup document written by `export` and read back by the import merger.

use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const EXPORT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub items: Vec<Snippet>,
}

impl ExportDocument {
    pub fn new(items: &[Snippet]) -> Self {
        Self {
            version: EXPORT_VERSION,
            exported_at: Utc::now(),
            items: items.to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(SnipzError::Serialization)
    }
}

/// Parses backup bytes into a JSON value for the merger. Text that is not JSON
/// at all is a format error, the same as a document of the wrong shape.
pub fn parse_backup(raw: &str) -> Result<serde_json::Value> {
    serde_json::from_str(raw).map_err(|e| SnipzError::Format(format!("not valid JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_has_version_timestamp_and_items() {
        let items = vec![Snippet::new("a".into(), "hello".into(), vec![], false)];
        let json = ExportDocument::new(&items).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], 1);
        assert!(value["exportedAt"].is_string());
        assert_eq!(value["items"][0]["text"], "hello");
    }

    #[test]
    fn garbage_is_a_format_error() {
        assert!(matches!(parse_backup("not json"), Err(SnipzError::Format(_))));
        assert!(parse_backup("[]").is_ok());
    }
}
