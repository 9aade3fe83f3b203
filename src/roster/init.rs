//! # Context Initialization
//!
//! Resolves where roster keeps its data and builds the API over a [`FileStore`].
//!
//! The data directory is chosen in this order:
//! 1. An explicit path (the CLI's `--data-dir` flag)
//! 2. The `ROSTER_DATA` environment variable
//! 3. The OS-appropriate data directory (via the `directories` crate)

use crate::api::RosterApi;
use crate::commands::RosterPaths;
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "ROSTER_DATA";

pub struct RosterContext {
    pub api: RosterApi<FileStore>,
    pub config: RosterConfig,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Store("Could not determine a data directory".to_string()))
}

/// Loads configuration and the record collection from `data_dir`.
pub fn initialize(data_dir: PathBuf) -> Result<RosterContext> {
    let config = RosterConfig::load(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), page_size = config.page_size, "initializing");

    let store = FileStore::new(data_dir.clone());
    let paths = RosterPaths { data_dir };
    let api = RosterApi::new(store, paths, config.clone());

    Ok(RosterContext { api, config })
}
