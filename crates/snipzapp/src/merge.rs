//! # Import Merger
//!
//! Reconciles a parsed backup document with the current collection.
//!
//! The document is either a bare array of records or an object with an `items`
//! array (the export format). Any other shape is a [`SnipzError::Format`] and
//! nothing is imported. Inside a valid document, records are cleaned one by one
//! and bad ones are dropped without failing the import:
//!
//! | Field | Rule |
//! |-------|------|
//! | `text` | must be a string with non-blank content, kept untrimmed |
//! | `id` | taken when truthy (numbers and `true` are stringified, `7.0` as `7`), else fresh |
//! | `tags` | array elements stringified and lowercased, else empty |
//! | `pinned` | truthiness of whatever is there |
//! | `createdAt` | ISO 8601 string (offset-less and date-only forms read as UTC), else now |
//! | `updatedAt` | same forms as `createdAt`, else `createdAt` |
//!
//! Cleaned records overlay the current collection by id: a record with an
//! existing id replaces that snippet wholesale. The merged collection comes
//! back sorted newest first.

use crate::error::{Result, SnipzError};
use crate::model::{IdGenerator, Snippet};
use crate::normalize::import_tags;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Counts describing what a merge did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Records that survived cleaning.
    pub imported: usize,
    /// Records dropped for lacking usable text.
    pub dropped: usize,
    /// Existing snippets replaced by an incoming record with the same id.
    pub replaced: usize,
}

pub fn merge(current: &[Snippet], incoming: &Value, ids: &dyn IdGenerator) -> Result<Vec<Snippet>> {
    merge_with_report(current, incoming, ids).map(|(items, _)| items)
}

pub fn merge_with_report(
    current: &[Snippet],
    incoming: &Value,
    ids: &dyn IdGenerator,
) -> Result<(Vec<Snippet>, MergeReport)> {
    let records = candidate_records(incoming)?;
    let now = Utc::now();
    let mut report = MergeReport::default();

    let mut merged: Vec<Snippet> = current.to_vec();
    let mut index: HashMap<String, usize> = merged
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id.clone(), i))
        .collect();
    let existing = index.len();

    for record in records {
        let Some(snippet) = clean_record(record, ids, now) else {
            report.dropped += 1;
            continue;
        };
        report.imported += 1;
        match index.get(&snippet.id) {
            Some(&pos) => {
                if pos < existing {
                    report.replaced += 1;
                }
                merged[pos] = snippet;
            }
            None => {
                index.insert(snippet.id.clone(), merged.len());
                merged.push(snippet);
            }
        }
    }

    if report.dropped > 0 {
        warn!(dropped = report.dropped, "skipped import records without text");
    }
    debug!(?report, total = merged.len(), "merged import");

    merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok((merged, report))
}

fn candidate_records(incoming: &Value) -> Result<&[Value]> {
    match incoming {
        Value::Array(items) => Ok(items),
        Value::Object(map) => match map.get("items") {
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(SnipzError::Format("'items' is not an array".to_string())),
            None => Err(SnipzError::Format(
                "expected an array or an object with an 'items' array".to_string(),
            )),
        },
        other => Err(SnipzError::Format(format!(
            "expected an array or an object, found {}",
            json_kind(other)
        ))),
    }
}

fn clean_record(record: &Value, ids: &dyn IdGenerator, now: DateTime<Utc>) -> Option<Snippet> {
    let fields = record.as_object()?;
    let text = match fields.get("text") {
        Some(Value::String(text)) if !text.trim().is_empty() => text.clone(),
        _ => return None,
    };

    let id = id_of(fields).unwrap_or_else(|| ids.new_id());
    let tags = match fields.get("tags") {
        Some(Value::Array(values)) => import_tags(values),
        _ => Vec::new(),
    };
    let pinned = fields.get("pinned").is_some_and(is_truthy);
    let created_at = timestamp_of(fields, "createdAt").unwrap_or(now);
    let updated_at = timestamp_of(fields, "updatedAt").unwrap_or(created_at);

    Some(Snippet {
        id,
        text,
        tags,
        pinned,
        created_at,
        updated_at,
    })
}

fn id_of(fields: &Map<String, Value>) -> Option<String> {
    match fields.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(number_id(n)),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Integral numbers print without a fraction, so `7.0` and `7` name the same id.
fn number_id(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// RFC 3339 first; timestamps without an offset and bare dates are taken as UTC.
fn timestamp_of(fields: &Map<String, Value>, key: &str) -> Option<DateTime<Utc>> {
    let raw = fields.get(key)?.as_str()?.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Utc));
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|t| t.and_utc())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
