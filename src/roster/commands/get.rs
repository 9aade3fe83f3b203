use crate::commands::CmdResult;
use crate::error::{Result, RosterError};
use crate::index::{resolve_selector, RecordSelector};
use crate::store::DataStore;

/// Looks up every selector; any miss is an error.
pub fn run<S: DataStore>(store: &S, selectors: &[RecordSelector]) -> Result<CmdResult> {
    let mut listed = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let found = resolve_selector(store, selector)
            .ok_or_else(|| RosterError::RecordNotFound(selector.to_string()))?;
        listed.push(found);
    }
    Ok(CmdResult::default().with_listed_records(listed))
}
