use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayRecord;
use crate::model::{Draft, Record};
use crate::store::DataStore;

/// Validates `draft`, appends it as a new record and clears it.
/// An invalid draft is left as it was so the caller can correct it.
pub fn run<S: DataStore>(store: &mut S, draft: &mut Draft) -> Result<CmdResult> {
    draft.validate()?;

    let record = Record::from_draft(draft);
    store.insert_record(record.clone())?;
    draft.clear();
    tracing::info!(id = %record.id, "record added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record added: {} <{}>",
        record.name, record.email
    )));
    // New records always go last
    result.affected_records.push(DisplayRecord {
        position: store.records().len(),
        record,
    });
    Ok(result)
}
