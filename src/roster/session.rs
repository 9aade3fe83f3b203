//! # Edit Sessions
//!
//! Editing works on a copy. Beginning an edit copies the record into a buffer; the
//! buffer can be changed freely; saving hands it back for commit and cancelling drops it.
//!
//! ```text
//! Idle ──begin(R)──▶ Editing(copy of R) ──save──▶ Idle   (collection updated)
//!                            │
//!                            └──────cancel─────▶ Idle   (collection unchanged)
//! ```
//!
//! Only one record is edited at a time. Beginning a new edit while one is open
//! replaces the buffer without asking.

use crate::model::{Record, RecordPatch};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(Record),
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an edit on a copy of `record`, discarding any open buffer.
    pub fn begin(&mut self, record: &Record) {
        if let EditSession::Editing(previous) = self {
            tracing::debug!(id = %previous.id, "replacing open edit buffer");
        }
        *self = EditSession::Editing(record.clone());
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    pub fn buffer(&self) -> Option<&Record> {
        match self {
            EditSession::Editing(record) => Some(record),
            EditSession::Idle => None,
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut Record> {
        match self {
            EditSession::Editing(record) => Some(record),
            EditSession::Idle => None,
        }
    }

    /// Applies `patch` to the buffer. Returns false when no edit is open.
    pub fn apply(&mut self, patch: &RecordPatch) -> bool {
        match self.buffer_mut() {
            Some(record) => {
                record.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Closes the session and returns the buffer to commit.
    pub fn finish(&mut self) -> Option<Record> {
        match std::mem::take(self) {
            EditSession::Editing(record) => Some(record),
            EditSession::Idle => None,
        }
    }

    /// Closes the session, dropping the buffer.
    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }
}
