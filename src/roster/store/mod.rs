//! # Storage Layer
//!
//! This module defines the storage abstraction for roster. The [`DataStore`] trait
//! is what the command layer talks to; [`record_store::RecordStore`] is its only
//! implementation, generic over a raw key-value [`backend::StorageBackend`].
//!
//! ## Ownership
//!
//! The store owns the collection. It is loaded once, when the store is built, and
//! lives in memory for the rest of the session. There is no global state: callers
//! hold the store (usually through [`crate::api::RosterApi`]) and pass it by reference.
//!
//! ## Write-Back
//!
//! Every successful mutation (insert, update, remove) is followed by one explicit
//! `save()` that writes the **entire** collection under [`RECORDS_KEY`]. There is no
//! batching and no incremental diff. Reads never write.
//!
//! If the write fails, the in-memory change is rolled back so memory and storage agree.
//!
//! ## Loading
//!
//! Missing data loads as an empty collection. Data that fails to parse also loads as
//! an empty collection (with a warning in the log) rather than failing the session.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: `RecordStore<FsBackend>`, one JSON file per key.
//! - [`memory::InMemoryStore`]: `RecordStore<MemBackend>`, for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── crud_items.json     # The collection: JSON array of records
//! └── config.json         # Roster configuration
//! ```

use crate::error::Result;
use crate::model::{Record, RecordPatch};
use uuid::Uuid;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod record_store;

/// Key under which the collection is persisted.
pub const RECORDS_KEY: &str = "crud_items";

/// Abstract interface for record storage.
///
/// Records are kept in insertion order, which is also creation order.
pub trait DataStore {
    /// All records, oldest first.
    fn records(&self) -> &[Record];

    /// Look up a record by id.
    fn get_record(&self, id: &Uuid) -> Option<&Record> {
        self.records().iter().find(|r| r.id == *id)
    }

    /// Append a record at the end of the collection and persist.
    fn insert_record(&mut self, record: Record) -> Result<()>;

    /// Apply `patch` to the record with `id` in place and persist.
    /// Returns Ok(None) without writing if no record has that id.
    fn update_record(&mut self, id: &Uuid, patch: &RecordPatch) -> Result<Option<Record>>;

    /// Remove the record with `id` and persist.
    /// Returns Ok(None) without writing if no record has that id.
    fn remove_record(&mut self, id: &Uuid) -> Result<Option<Record>> {
        Ok(self.remove_records(std::slice::from_ref(id))?.pop())
    }

    /// Remove every record whose id is in `ids` and persist once.
    /// Either all of them are removed or, if the write fails, none are.
    /// Ids with no record are skipped; nothing is written if none match.
    fn remove_records(&mut self, ids: &[Uuid]) -> Result<Vec<Record>>;
}
