//! # Views: Search + Pagination
//!
//! A view is the slice of the collection shown at a given moment. It is derived
//! from `(records, search, page, page_size)` and nothing else; building one never
//! touches storage.
//!
//! 1. **Filter**: keep records whose name, email or role contains the search term,
//!    ignoring case. An empty term keeps everything.
//! 2. **Paginate**: `total_pages = ceil(matches / page_size)` (0 when nothing matches),
//!    then take `[(page - 1) * page_size, page * page_size)` clamped to what exists.
//!
//! Out-of-range pages (including page 0) produce an empty slice. Deciding which
//! page numbers to offer is up to the caller; [`Pagination::page_numbers`] lists the
//! valid ones.

use crate::model::Record;
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub search: String,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

impl Pagination {
    /// Valid page numbers, `1..=total_pages`.
    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }

    pub fn is_current(&self, page: usize) -> bool {
        self.page == page
    }

    pub fn is_out_of_range(&self) -> bool {
        self.page == 0 || self.page > self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPage {
    pub records: Vec<Record>,
    pub pagination: Pagination,
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Records matching `search`, in collection order.
pub fn filter<'a>(records: &'a [Record], search: &str) -> Vec<&'a Record> {
    let needle = search.to_lowercase();
    records.iter().filter(|r| r.matches(&needle)).collect()
}

/// The `page`-th slice of `items`, empty when the page does not exist.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub fn view(records: &[Record], search: &str, page: usize, page_size: usize) -> RecordPage {
    let matched = filter(records, search);
    let slice = paginate(&matched, page, page_size);

    RecordPage {
        records: slice.iter().map(|r| (*r).clone()).collect(),
        pagination: Pagination {
            search: search.to_string(),
            page,
            page_size,
            total_pages: total_pages(matched.len(), page_size),
            total_matches: matched.len(),
        },
    }
}
