use super::fs_backend::FsBackend;
use super::record_store::RecordStore;
use std::path::PathBuf;

pub type FileStore = RecordStore<FsBackend>;

impl FileStore {
    /// Open (or lazily create) the store rooted at `data_dir`.
    pub fn new(data_dir: PathBuf) -> Self {
        RecordStore::with_backend(FsBackend::new(data_dir))
    }
}
