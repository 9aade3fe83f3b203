use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayRecord;
use crate::query::ViewQuery;
use crate::store::DataStore;
use crate::view::view;
use std::collections::HashMap;
use uuid::Uuid;

/// Filters and paginates the collection. Never writes.
pub fn run<S: DataStore>(store: &S, query: &ViewQuery, page_size: usize) -> Result<CmdResult> {
    let records = store.records();
    let page = view(records, &query.search, query.page, page_size);

    let positions: HashMap<Uuid, usize> = records
        .iter()
        .enumerate()
        .map(|(i, r)| (r.id, i + 1))
        .collect();
    let listed = page
        .records
        .into_iter()
        .map(|record| DisplayRecord {
            position: positions[&record.id],
            record,
        })
        .collect();

    Ok(CmdResult::default()
        .with_listed_records(listed)
        .with_pagination(page.pagination))
}
