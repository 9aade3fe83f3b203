//! # Configuration
//!
//! Roster keeps its settings in `config.json` inside the data directory, next to the
//! record collection. A missing file means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page-size` | `5` | Records shown per page in `roster list` |

use crate::error::{Result, RosterError};
use crate::view::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: &[&str] = &["page-size"];

/// Configuration for roster, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Records per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        if config.page_size == 0 {
            return Err(RosterError::Store(format!(
                "{}: page_size must be at least 1",
                config_path.display()
            )));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" | "page_size" => Some(self.page_size.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "page-size" | "page_size" => {
                let size: usize = value
                    .parse()
                    .map_err(|_| format!("page-size must be a number, got '{}'", value))?;
                if size == 0 {
                    return Err("page-size must be at least 1".to_string());
                }
                self.page_size = size;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
