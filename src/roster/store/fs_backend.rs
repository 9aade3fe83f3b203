use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Filesystem storage backend: one `<key>.json` file per key inside `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file holding `key`.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RosterError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(RosterError::Io)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(RosterError::Io)?;
        fs::rename(&tmp_path, self.key_path(key)).map_err(RosterError::Io)?;

        Ok(())
    }
}
