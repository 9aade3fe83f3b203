use super::backend::StorageBackend;
use super::{DataStore, RECORDS_KEY};
use crate::error::{Result, RosterError};
use crate::model::{Record, RecordPatch};
use uuid::Uuid;

pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    records: Vec<Record>,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Build a store and load the collection from `backend`.
    pub fn with_backend(backend: B) -> Self {
        let records = load_records(&backend);
        Self { backend, records }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Write the whole collection back to the backend.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.records).map_err(RosterError::Serialization)?;
        self.backend.set(RECORDS_KEY, &json)?;
        tracing::debug!(count = self.records.len(), "saved records");
        Ok(())
    }
}

/// Reads the persisted collection, falling back to an empty one when the key is
/// absent, unreadable, or holds something that is not a record array.
fn load_records<B: StorageBackend>(backend: &B) -> Vec<Record> {
    let raw = match backend.get(RECORDS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("no stored records, starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not read stored records, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Record>>(&raw) {
        Ok(records) => {
            tracing::debug!(count = records.len(), "loaded records");
            records
        }
        Err(e) => {
            tracing::warn!(error = %e, "stored records are malformed, starting empty");
            Vec::new()
        }
    }
}

impl<B: StorageBackend> DataStore for RecordStore<B> {
    fn records(&self) -> &[Record] {
        &self.records
    }

    fn insert_record(&mut self, record: Record) -> Result<()> {
        self.records.push(record);
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    fn update_record(&mut self, id: &Uuid, patch: &RecordPatch) -> Result<Option<Record>> {
        let Some(pos) = self.records.iter().position(|r| r.id == *id) else {
            return Ok(None);
        };

        let previous = self.records[pos].clone();
        self.records[pos].apply(patch);
        if let Err(e) = self.save() {
            self.records[pos] = previous;
            return Err(e);
        }
        Ok(Some(self.records[pos].clone()))
    }

    fn remove_records(&mut self, ids: &[Uuid]) -> Result<Vec<Record>> {
        if !self.records.iter().any(|r| ids.contains(&r.id)) {
            return Ok(Vec::new());
        }

        let previous = self.records.clone();
        let (removed, kept): (Vec<Record>, Vec<Record>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|r| ids.contains(&r.id));
        self.records = kept;
        if let Err(e) = self.save() {
            self.records = previous;
            return Err(e);
        }
        Ok(removed)
    }
}
