//! # Record Identifiers: UUID vs Position
//!
//! Records are identified by a UUID, which is the right technical choice but awkward to
//! type. The CLI therefore also accepts a **position**: the record's 1-based place in the
//! full, unfiltered collection.
//!
//! Positions follow insertion order, which never changes except when a record is
//! removed. Searching or paging does not renumber anything, so `roster edit 7` targets
//! the same record regardless of the current view.
//!
//! ## Selector Grammar
//!
//! - **UUID**: `6f1c1f0e-2f6b-4b7e-9d38-0f5f3e1c2a11`
//! - **Position**: `N` (e.g. `1`, `42`)
//! - **Range**: `Start-End` of positions (e.g. `2-4`); start must be ≤ end and a range
//!   covers at most [`MAX_RANGE_LEN`] positions
//!
//! UUIDs contain dashes too, so a selector is tried as a UUID before being read as a range.

use crate::model::Record;
use crate::store::DataStore;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Widest range a single selector may expand to.
pub const MAX_RANGE_LEN: usize = 1000;

/// A record paired with its 1-based position in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub position: usize,
    pub record: Record,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordSelector {
    Id(Uuid),
    Position(usize),
}

impl fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSelector::Id(id) => write!(f, "{}", id),
            RecordSelector::Position(n) => write!(f, "{}", n),
        }
    }
}

/// Parses one selector argument, expanding ranges.
pub fn parse_selector(s: &str) -> Result<Vec<RecordSelector>, String> {
    let s = s.trim();
    if let Ok(id) = Uuid::parse_str(s) {
        return Ok(vec![RecordSelector::Id(id)]);
    }

    if let Some((start, end)) = s.split_once('-') {
        let start = parse_position(start)?;
        let end = parse_position(end)?;
        if start > end {
            return Err(format!("Invalid range: {} is after {}", start, end));
        }
        if end - start >= MAX_RANGE_LEN {
            return Err(format!(
                "Invalid range: {}-{} spans more than {} records",
                start, end, MAX_RANGE_LEN
            ));
        }
        return Ok((start..=end).map(RecordSelector::Position).collect());
    }

    parse_position(s).map(|n| vec![RecordSelector::Position(n)])
}

fn parse_position(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("Invalid record selector: {}", s)),
    }
}

/// Finds the record a selector points at, if any.
pub fn resolve_selector<S: DataStore>(store: &S, selector: &RecordSelector) -> Option<DisplayRecord> {
    let records = store.records();
    match selector {
        RecordSelector::Id(id) => records
            .iter()
            .position(|r| r.id == *id)
            .map(|i| DisplayRecord {
                position: i + 1,
                record: records[i].clone(),
            }),
        RecordSelector::Position(n) => records.get(n.wrapping_sub(1)).map(|r| DisplayRecord {
            position: *n,
            record: r.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn parses_positions_and_ranges() {
        assert_eq!(parse_selector("3"), Ok(vec![RecordSelector::Position(3)]));
        assert_eq!(
            parse_selector("2-4"),
            Ok(vec![
                RecordSelector::Position(2),
                RecordSelector::Position(3),
                RecordSelector::Position(4)
            ])
        );
        assert!(parse_selector("4-2").unwrap_err().contains("Invalid range"));
        assert!(parse_selector("0").is_err());
        assert!(parse_selector("abc").is_err());
        assert!(parse_selector("").is_err());
    }

    #[test]
    fn oversized_ranges_are_rejected() {
        let err = parse_selector("1-400000000").unwrap_err();
        assert!(err.contains("Invalid range"));
        assert!(parse_selector("1-99999999999").is_err());

        let widest = parse_selector(&format!("1-{}", MAX_RANGE_LEN)).unwrap();
        assert_eq!(widest.len(), MAX_RANGE_LEN);
        assert!(parse_selector(&format!("1-{}", MAX_RANGE_LEN + 1)).is_err());
    }

    #[test]
    fn uuid_wins_over_range() {
        let id = Uuid::new_v4();
        assert_eq!(
            parse_selector(&id.to_string()),
            Ok(vec![RecordSelector::Id(id)])
        );
    }

    #[test]
    fn resolves_by_position_and_id() {
        let fixture = StoreFixture::new().with_records(3);
        let second = fixture.store.records()[1].clone();

        let by_pos = resolve_selector(&fixture.store, &RecordSelector::Position(2)).unwrap();
        assert_eq!(by_pos.record, second);

        let by_id = resolve_selector(&fixture.store, &RecordSelector::Id(second.id)).unwrap();
        assert_eq!(by_id.position, 2);

        assert!(resolve_selector(&fixture.store, &RecordSelector::Position(4)).is_none());
        assert!(resolve_selector(&fixture.store, &RecordSelector::Id(Uuid::new_v4())).is_none());
    }
}
