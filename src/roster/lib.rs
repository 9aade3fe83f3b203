//! # Roster Architecture
//!
//! Roster is a **UI-agnostic record-management library**: an ordered collection of
//! people records (name, email, role) with create, update, delete, search and
//! pagination, persisted to a key-value store. The `roster` binary is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (positions/UUIDs → records)            │
//! │  - Owns the edit session                                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over an owned, ordered collection        │
//! │  - Key-value backends: filesystem, in-memory                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the process
//! and never assumes a terminal. Diagnostics go through `tracing`; the binary decides
//! whether and where they are shown.
//!
//! ## Derived Views
//!
//! What a user sees (search + page) is computed by [`view::view`], a pure function of
//! the records and the [`query::ViewQuery`]. Listing never mutates or persists anything.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Record`, `Draft`, `RecordPatch`)
//! - [`view`]: Search filtering and pagination
//! - [`query`]: Page/search parameters
//! - [`session`]: Edit-session state machine
//! - [`index`]: Positions and selector parsing
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod query;
pub mod session;
pub mod store;
pub mod view;
