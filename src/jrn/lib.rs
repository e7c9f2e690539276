//! # jrn Architecture
//!
//! jrn is a **UI-agnostic journaling library** with a CLI client in front
//! of it. Notes are short, timestamped, categorized text entries stored
//! in one SQLite file per journal; a small JSON config file remembers
//! which journal is active.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, prompts, renders tables                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs, returns structured Result types       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per journal operation                         │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store.rs)                                   │
//! │  - JournalStore over one rusqlite Connection                │
//! │  - The only module that issues SQL                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ids
//!
//! Note ids are plain integers assigned by the store: one greater than
//! the current maximum, 0 for an empty journal. Higher id means more
//! recent; ids are never reused, so they double as the recency sort key.
//! See `store.rs`.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, and never writes to stdout/stderr or calls
//! `std::process::exit`. The two interactive moments the tool has (the
//! erase confirmation, the edit prompt) live at the edge: erase's
//! confirmation in its command module, edit's prompt in `main.rs`.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of each operation
//!    against `JournalStore::open_in_memory()`. The lion's share.
//! 2. **Parsing** (`range.rs`): exhaustive token-shape tests.
//! 3. **CLI** (`tests/cli_integration.rs`): end-to-end runs of the
//!    compiled binary in a `JRN_HOME` sandbox.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: SQLite-backed note storage
//! - [`model`]: The `Note` entity and timestamp formats
//! - [`range`]: Delete-criteria parsing (ids, spans, open bounds)
//! - [`config`]: Active-journal configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod range;
pub mod store;
