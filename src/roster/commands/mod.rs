//! # Command Layer
//!
//! This module contains the **core business logic** of roster. Each command lives in its
//! own submodule and implements pure Rust functions that operate on data types.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Implement the actual logic for each operation
//! - Operate on `Record`, `Draft`, `RecordPatch` and the other domain types
//! - Return structured `CmdResult` with affected records and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Any I/O**: No stdout, stderr, file formatting, or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//! - **User interaction**: No prompts, confirmations (return data, UI decides)
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. This struct carries:
//! - `affected_records`: Records that were created, changed or removed
//! - `listed_records`: Records to display
//! - `pagination`: Page metadata for `list`
//! - `messages`: Structured messages with levels (info, success, warning); failures are `Err`
//! - `config`: Configuration data (for `config` command)
//!
//! Both record lists use [`DisplayRecord`], which pairs a record with its position in
//! the collection so clients can refer back to it.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` to avoid filesystem dependencies.
//!
//! ## Command Modules
//!
//! - [`add`]: Validate a draft and append a new record
//! - [`list`]: Search + paginate the collection
//! - [`get`]: Retrieve records by selector
//! - [`update`]: Patch an existing record in place
//! - [`remove`]: Permanently remove records
//! - [`config`]: Manage configuration

use crate::config::RosterConfig;
use crate::index::DisplayRecord;
use crate::view::Pagination;
use serde::Serialize;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod get;
pub mod list;
pub mod remove;
pub mod update;

#[derive(Debug, Clone)]
pub struct RosterPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<DisplayRecord>,
    pub listed_records: Vec<DisplayRecord>,
    pub pagination: Option<Pagination>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }
}
