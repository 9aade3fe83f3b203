use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_selector, DisplayRecord, RecordSelector};
use crate::store::DataStore;
use uuid::Uuid;

/// Permanently removes the selected records.
///
/// Selectors are resolved against the collection as it was before anything is removed,
/// so `remove 1 2` removes the first two records rather than the first and third.
/// Selectors that match nothing produce a warning, not an error. All removals are
/// written together: if the write fails, nothing is removed.
pub fn run<S: DataStore>(store: &mut S, selectors: &[RecordSelector]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let mut targets: Vec<DisplayRecord> = Vec::new();
    for selector in selectors {
        match resolve_selector(store, selector) {
            Some(found) => {
                if !targets.iter().any(|t| t.record.id == found.record.id) {
                    targets.push(found);
                }
            }
            None => result.add_message(CmdMessage::warning(format!(
                "No record matches {}",
                selector
            ))),
        }
    }

    let ids: Vec<Uuid> = targets.iter().map(|t| t.record.id).collect();
    let removed = store.remove_records(&ids)?;

    for target in targets {
        if !removed.iter().any(|r| r.id == target.record.id) {
            continue;
        }
        tracing::info!(id = %target.record.id, "record removed");
        result.add_message(CmdMessage::success(format!(
            "Record removed ({}): {}",
            target.position, target.record.name
        )));
        result.affected_records.push(target);
    }

    Ok(result)
}
