use crate::error::Result;

/// Abstract interface for raw key-value persistence.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`RecordStore`](super::record_store::RecordStore) handles the "what"
/// (the collection, its ordering, and when it gets written back).
///
/// Values are opaque strings; the record store puts JSON in them.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
