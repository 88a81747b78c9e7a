//! # Configuration
//!
//! Snipz configuration is a [`confique`] struct, resolved in priority order:
//! 1. **Environment variables**: `SNIPZ_DATA_DIR`, `SNIPZ_DEFAULT_SORT`, etc.
//! 2. **Config file**: `snipz.toml` in the config directory (see [`crate::init`]).
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Where `snippets.json` lives |
//! | `default_sort` | `newest` | List order when `--sort` is omitted |
//! | `default_filter` | `all` | List filter when `--filter` is omitted |
//! | `title_width` | `42` | Characters of text shown per list row |
//! | `export_file` | `snipz-backup.json` | Default `export` target |

use crate::error::{Result, SnipzError};
use crate::normalize::DEFAULT_TITLE_WIDTH;
use crate::view::{Filter, SortOrder};
use confique::Config;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const CONFIG_FILE: &str = "snipz.toml";
pub const DEFAULT_EXPORT_FILE: &str = "snipz-backup.json";
/// Upper bound applied to `title_width` before rendering.
pub const MAX_TITLE_WIDTH: usize = 1000;

#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SnipzConfig {
    /// Directory holding `snippets.json`. Defaults to the OS data directory.
    #[config(env = "SNIPZ_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// newest, oldest or alphabetical
    #[config(env = "SNIPZ_DEFAULT_SORT", default = "newest")]
    pub default_sort: String,

    /// all, pinned or unpinned
    #[config(env = "SNIPZ_DEFAULT_FILTER", default = "all")]
    pub default_filter: String,

    #[config(env = "SNIPZ_TITLE_WIDTH", default = 42)]
    pub title_width: usize,

    #[config(env = "SNIPZ_EXPORT_FILE", default = "snipz-backup.json")]
    pub export_file: PathBuf,
}

impl Default for SnipzConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_sort: SortOrder::Newest.to_string(),
            default_filter: Filter::All.to_string(),
            title_width: DEFAULT_TITLE_WIDTH,
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl SnipzConfig {
    /// Environment, then `<config_dir>/snipz.toml`, then defaults.
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(config_dir.join(CONFIG_FILE))
            .load()
            .map_err(|e| SnipzError::Config(e.to_string()))
    }

    /// File and defaults only; ignores the environment.
    pub fn load_file(path: &Path) -> Result<Self> {
        Self::builder()
            .file(path)
            .load()
            .map_err(|e| SnipzError::Config(e.to_string()))
    }

    /// The configured sort order; an unknown name falls back to newest.
    pub fn sort_order(&self) -> SortOrder {
        self.default_sort.parse().unwrap_or_else(|e: String| {
            warn!("default_sort: {}", e);
            SortOrder::default()
        })
    }

    /// The configured title width, clamped to `1..=MAX_TITLE_WIDTH`.
    pub fn title_width(&self) -> usize {
        let width = self.title_width.clamp(1, MAX_TITLE_WIDTH);
        if width != self.title_width {
            warn!("title_width {} out of range, using {}", self.title_width, width);
        }
        width
    }

    /// The configured filter; an unknown name falls back to all.
    pub fn filter(&self) -> Filter {
        self.default_filter.parse().unwrap_or_else(|e: String| {
            warn!("default_filter: {}", e);
            Filter::default()
        })
    }
}
