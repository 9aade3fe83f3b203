use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::index::DisplayRecord;
use crate::model::RecordPatch;
use crate::store::DataStore;
use uuid::Uuid;

/// Replaces the patched fields of the record with `id`, keeping its position.
pub fn run<S: DataStore>(store: &mut S, id: &Uuid, patch: &RecordPatch) -> Result<CmdResult> {
    let not_found = || RosterError::RecordNotFound(id.to_string());
    let position = store
        .records()
        .iter()
        .position(|r| r.id == *id)
        .ok_or_else(not_found)?
        + 1;

    let record = store.update_record(id, patch)?.ok_or_else(not_found)?;
    tracing::info!(id = %record.id, "record updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record updated ({}): {}",
        position, record.name
    )));
    result
        .affected_records
        .push(DisplayRecord { position, record });
    Ok(result)
}
