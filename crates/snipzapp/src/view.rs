//! # View Builder
//!
//! Computes the ordered list to display from the collection and the current
//! search, filter and sort settings. It works on a copy and never touches the
//! store.
//!
//! The pipeline is: filter by pin state, keep query matches, apply the base
//! sort, then move pinned snippets ahead of unpinned ones with a stable
//! partition so the base order survives inside each group. The partition is
//! skipped for [`Filter::Unpinned`], where it would be a no-op anyway.

use crate::model::Snippet;
use serde::Serialize;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Pinned,
    Unpinned,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Alphabetical,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub query: String,
    pub filter: Filter,
    pub sort: SortOrder,
}

impl ViewParams {
    pub fn new(query: impl Into<String>, filter: Filter, sort: SortOrder) -> Self {
        Self {
            query: query.into(),
            filter,
            sort,
        }
    }
}

pub fn build_view(items: &[Snippet], params: &ViewParams) -> Vec<Snippet> {
    let query = params.query.trim().to_lowercase();

    let mut view: Vec<Snippet> = items
        .iter()
        .filter(|s| match params.filter {
            Filter::All => true,
            Filter::Pinned => s.pinned,
            Filter::Unpinned => !s.pinned,
        })
        .filter(|s| query.is_empty() || matches_query(s, &query))
        .cloned()
        .collect();

    match params.sort {
        SortOrder::Newest => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => view.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Alphabetical => view.sort_by(|a, b| compare_text(&a.text, &b.text)),
    }

    if params.filter != Filter::Unpinned {
        // stable sort on !pinned: pinned first, base order kept within each group
        view.sort_by_key(|s| !s.pinned);
    }

    view
}

/// `query` must already be trimmed and lowercased.
fn matches_query(snippet: &Snippet, query: &str) -> bool {
    snippet.text.to_lowercase().contains(query)
        || snippet
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
}

/// Collation in three levels: base letters (accents and case folded away),
/// then accents (unaccented first), then case (lowercase first). The exact
/// text breaks any remaining tie.
fn compare_text(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| with_accents(a).cmp(with_accents(b)))
        .then_with(|| case_flags(a).cmp(case_flags(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn case_flags(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

fn with_accents(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "pinned" => Ok(Filter::Pinned),
            "unpinned" => Ok(Filter::Unpinned),
            other => Err(format!(
                "unknown filter '{}' (expected all, pinned or unpinned)",
                other
            )),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Filter::All => "all",
            Filter::Pinned => "pinned",
            Filter::Unpinned => "unpinned",
        };
        f.write_str(name)
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" | "new" => Ok(SortOrder::Newest),
            "oldest" | "old" => Ok(SortOrder::Oldest),
            "alphabetical" | "alpha" | "az" => Ok(SortOrder::Alphabetical),
            other => Err(format!(
                "unknown sort order '{}' (expected newest, oldest or alphabetical)",
                other
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Alphabetical => "alphabetical",
        };
        f.write_str(name)
    }
}
