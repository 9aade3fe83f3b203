//! # CLI Layer
//!
//! This module is **one possible UI client** for roster. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - [`setup`]: clap definitions
//! - `commands`: `run()`, context setup and the per-command `handle_*()` functions
//! - `render`: turns `CmdResult` data into strings

mod commands;
mod render;
pub mod setup;

pub use commands::run;
