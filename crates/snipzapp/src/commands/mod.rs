//! # Command Layer
//!
//! One submodule per user operation. Commands are plain functions over a
//! [`SnippetStore`](crate::store::SnippetStore) that return a structured
//! [`CmdResult`]; they never print, prompt or exit. The UI layer decides how to
//! show the result.
//!
//! [`CmdResult`] carries:
//! - `affected`: snippets created or modified by the operation
//! - `listed`: snippets to display
//! - `stats`: collection totals, when the command computes them
//! - `export`: the backup document, for `export`
//! - `messages`: user notifications with a level (info, success, warning, error)
//!
//! Command tests use `MemStorage` and carry most of the crate's coverage.
//!
//! ## Command Modules
//!
//! - [`add`]: Save a new snippet (from text or from the clipboard)
//! - [`list`]: Search, filter and sort
//! - [`view`]: Full snippets by id
//! - [`copy`]: Put a snippet's text on the clipboard
//! - [`edit`]: Replace text and tags together
//! - [`pinning`]: Toggle the pinned flag
//! - [`delete`]: Remove snippets
//! - [`clear`]: Remove everything
//! - [`stats`]: Totals
//! - [`export`]: Build the backup document
//! - [`import`]: Merge a backup document
//! - [`helpers`]: Id resolution and shared message helpers

use crate::export::ExportDocument;
use crate::model::{Snippet, Stats};
use serde::Serialize;

pub mod add;
pub mod clear;
pub mod copy;
pub mod delete;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod pinning;
pub mod stats;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Snippet>,
    pub listed: Vec<Snippet>,
    pub stats: Option<Stats>,
    pub export: Option<ExportDocument>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, snippets: Vec<Snippet>) -> Self {
        self.affected = snippets;
        self
    }

    pub fn with_listed(mut self, snippets: Vec<Snippet>) -> Self {
        self.listed = snippets;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
