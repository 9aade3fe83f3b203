//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all roster operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (selector strings → [`RecordSelector`]s → records)
//! - **Owns the edit session**, so only one record is ever being edited
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Selectors
//!
//! Methods that take `&[I: AsRef<str>]` accept positions (`3`), ranges (`2-4`) and
//! UUIDs. See [`crate::index`] for the grammar. Duplicates are dropped while
//! preserving order.
//!
//! ## Generic Over DataStore
//!
//! `RosterApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::index::{parse_selector, resolve_selector, RecordSelector};
use crate::model::{Draft, Record, RecordPatch};
use crate::query::ViewQuery;
use crate::session::EditSession;
use crate::store::DataStore;
use std::collections::HashSet;

/// The main API facade for roster operations.
pub struct RosterApi<S: DataStore> {
    store: S,
    paths: commands::RosterPaths,
    config: RosterConfig,
    session: EditSession,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S, paths: commands::RosterPaths, config: RosterConfig) -> Self {
        Self {
            store,
            paths,
            config,
            session: EditSession::new(),
        }
    }

    pub fn add_record(&mut self, draft: &mut Draft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn list_records(&self, query: &ViewQuery) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, query, self.config.page_size)
    }

    pub fn get_records<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::get::run(&self.store, &selectors)
    }

    pub fn update_record(&mut self, selector: &str, patch: &RecordPatch) -> Result<commands::CmdResult> {
        let record = self.resolve_one(selector)?;
        commands::update::run(&mut self.store, &record.id, patch)
    }

    pub fn delete_records<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::remove::run(&mut self.store, &selectors)
    }

    /// Opens an edit session on the selected record, replacing any open one.
    pub fn begin_edit(&mut self, selector: &str) -> Result<&Record> {
        let record = self.resolve_one(selector)?;
        self.session.begin(&record);
        self.session
            .buffer()
            .ok_or_else(|| RosterError::Api("Edit session did not open".to_string()))
    }

    /// The record currently being edited.
    pub fn edit_buffer(&self) -> Option<&Record> {
        self.session.buffer()
    }

    pub fn edit_buffer_mut(&mut self) -> Option<&mut Record> {
        self.session.buffer_mut()
    }

    pub fn apply_edit(&mut self, patch: &RecordPatch) -> Result<()> {
        if self.session.apply(patch) {
            Ok(())
        } else {
            Err(RosterError::Api("No record is being edited".to_string()))
        }
    }

    /// Commits the edit buffer. Only name, email and role are written back.
    pub fn save_edit(&mut self) -> Result<commands::CmdResult> {
        let buffer = self
            .session
            .finish()
            .ok_or_else(|| RosterError::Api("No record is being edited".to_string()))?;
        commands::update::run(&mut self.store, &buffer.id, &RecordPatch::from_record(&buffer))
    }

    /// Discards the edit buffer. The collection is left untouched.
    pub fn cancel_edit(&mut self) -> commands::CmdResult {
        let mut result = commands::CmdResult::default();
        if self.session.is_editing() {
            self.session.cancel();
            result.add_message(commands::CmdMessage::info("Edit cancelled"));
        }
        result
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn resolve_one(&self, selector: &str) -> Result<Record> {
        let selectors = parse_selector(selector).map_err(RosterError::Api)?;
        match selectors.as_slice() {
            [single] => resolve_selector(&self.store, single)
                .map(|found| found.record)
                .ok_or_else(|| RosterError::RecordNotFound(single.to_string())),
            _ => Err(RosterError::Api(format!(
                "Expected a single record, got {}",
                selector
            ))),
        }
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordSelector>> {
    let mut all = Vec::new();
    for input in inputs {
        all.extend(parse_selector(input.as_ref()).map_err(RosterError::Api)?);
    }

    // Deduplicate while preserving order
    let mut seen = HashSet::new();
    Ok(all.into_iter().filter(|s| seen.insert(s.clone())).collect())
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RosterPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api() -> RosterApi<InMemoryStore> {
        RosterApi::new(
            InMemoryStore::new(),
            RosterPaths {
                data_dir: PathBuf::from("memory://roster"),
            },
            RosterConfig::default(),
        )
    }

    fn seeded(names: &[&str]) -> RosterApi<InMemoryStore> {
        let mut api = api();
        for name in names {
            let email = format!("{}@x.com", name.to_lowercase());
            api.add_record(&mut Draft::new(*name, email, "Member"))
                .unwrap();
        }
        api
    }

    #[test]
    fn test_parse_selectors_dedupes_in_order() {
        let selectors = parse_selectors(&["2", "1-3"]).unwrap();
        assert_eq!(
            selectors,
            vec![
                RecordSelector::Position(2),
                RecordSelector::Position(1),
                RecordSelector::Position(3)
            ]
        );
    }

    #[test]
    fn test_parse_selectors_rejects_garbage() {
        assert!(matches!(
            parse_selectors(&["one"]),
            Err(RosterError::Api(_))
        ));
    }

    #[test]
    fn test_list_uses_configured_page_size() {
        let mut api = seeded(&["A", "B", "C"]);
        api.config.page_size = 2;
        let result = api.list_records(&ViewQuery::default()).unwrap();
        assert_eq!(result.listed_records.len(), 2);
        assert_eq!(result.pagination.unwrap().total_pages, 2);
    }

    #[test]
    fn test_update_by_position() {
        let mut api = seeded(&["Ann", "Bob"]);
        api.update_record("2", &RecordPatch::new().with_role("Admin"))
            .unwrap();
        assert_eq!(api.store().records()[1].role, "Admin");
    }

    #[test]
    fn test_update_rejects_ranges() {
        let mut api = seeded(&["Ann", "Bob"]);
        let err = api
            .update_record("1-2", &RecordPatch::new().with_role("Admin"))
            .unwrap_err();
        assert!(err.to_string().contains("single record"));
    }

    #[test]
    fn test_edit_session_save_commits_buffer() {
        let mut api = seeded(&["Ann", "Bob"]);
        let original = api.store().records()[0].clone();

        api.begin_edit("1").unwrap();
        api.edit_buffer_mut().unwrap().email = "ann@new.com".into();
        api.apply_edit(&RecordPatch::new().with_role("Owner"))
            .unwrap();
        let result = api.save_edit().unwrap();

        let saved = &api.store().records()[0];
        assert_eq!(saved.email, "ann@new.com");
        assert_eq!(saved.role, "Owner");
        assert_eq!(saved.id, original.id);
        assert_eq!(saved.created_at, original.created_at);
        assert_eq!(result.affected_records[0].position, 1);
        assert!(api.edit_buffer().is_none());
    }

    #[test]
    fn test_edit_session_cancel_leaves_collection() {
        let mut api = seeded(&["Ann"]);
        let before = api.store().records().to_vec();

        api.begin_edit("1").unwrap();
        api.apply_edit(&RecordPatch::new().with_name("Nobody"))
            .unwrap();
        let result = api.cancel_edit();

        assert_eq!(api.store().records(), before.as_slice());
        assert_eq!(result.messages.len(), 1);
        assert!(api.save_edit().is_err());
    }

    #[test]
    fn test_begin_edit_replaces_open_session() {
        let mut api = seeded(&["Ann", "Bob"]);
        api.begin_edit("1").unwrap();
        api.apply_edit(&RecordPatch::new().with_name("Changed"))
            .unwrap();
        api.begin_edit("2").unwrap();
        api.save_edit().unwrap();

        assert_eq!(api.store().records()[0].name, "Ann");
        assert_eq!(api.store().records()[1].name, "Bob");
    }

    #[test]
    fn test_save_edit_after_record_removed_is_not_found() {
        let mut api = seeded(&["Ann", "Bob"]);
        api.begin_edit("1").unwrap();
        api.delete_records(&["1"]).unwrap();

        let err = api.save_edit().unwrap_err();
        assert!(matches!(err, RosterError::RecordNotFound(_)));
        assert_eq!(api.store().records().len(), 1);
    }

    #[test]
    fn test_apply_edit_without_session() {
        let mut api = seeded(&["Ann"]);
        assert!(api.apply_edit(&RecordPatch::new().with_name("x")).is_err());
    }
}
