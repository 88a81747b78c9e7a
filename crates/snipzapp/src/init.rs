//! # Context Initialization
//!
//! Resolves where configuration and data live, loads the configuration and
//! wires a file-backed [`SnipzApi`] with the detected clipboard.
//!
//! ## Directory Resolution
//!
//! Config directory:
//! 1. `SNIPZ_CONFIG_DIR`, if set.
//! 2. The OS config directory (via the `directories` crate).
//!
//! Data directory:
//! 1. The explicit override passed to [`initialize`] (the CLI `--data-dir` flag).
//! 2. `data_dir` from the configuration (which already includes `SNIPZ_DATA_DIR`).
//! 3. The OS data directory.
//!
//! A configuration that fails to load does not stop the program: defaults are
//! used and the problem is returned in [`SnipzContext::config_warning`].

use crate::api::SnipzApi;
use crate::clipboard;
use crate::config::SnipzConfig;
use crate::error::{Result, SnipzError};
use crate::storage::fs::FileStorage;
use crate::store::SnippetStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const CONFIG_DIR_ENV: &str = "SNIPZ_CONFIG_DIR";

pub struct SnipzContext {
    pub api: SnipzApi<FileStorage>,
    pub config: SnipzConfig,
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub config_warning: Option<String>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "snipz", "snipz")
}

fn home_error() -> SnipzError {
    SnipzError::Config("could not determine a home directory".to_string())
}

pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    project_dirs()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(home_error)
}

fn default_data_dir() -> Result<PathBuf> {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(home_error)
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<SnipzContext> {
    let config_dir = config_dir()?;
    let (config, config_warning) = match SnipzConfig::load(&config_dir) {
        Ok(config) => (config, None),
        Err(e) => {
            warn!(error = %e, "falling back to default configuration");
            (SnipzConfig::default(), Some(e.to_string()))
        }
    };

    let data_dir = match data_override.or_else(|| config.data_dir.clone()) {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    debug!(config_dir = %config_dir.display(), data_dir = %data_dir.display(), "initializing");

    let store = SnippetStore::open(FileStorage::new(&data_dir));
    let api = SnipzApi::new(store, clipboard::detect());

    Ok(SnipzContext {
        api,
        config,
        config_dir,
        data_dir,
        config_warning,
    })
}
