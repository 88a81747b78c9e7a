//! # Snipz Architecture
//!
//! Snipz is a **UI-agnostic snippet engine**: short text snippets with tags and a
//! pinned flag, searched, filtered and sorted on demand, and backed up to a JSON
//! document that can be merged back in. The `snipz` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/snipz)                                         │
//! │  - Parses arguments, renders output, prompts, exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, owns the store and the clipboard strategy   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine                                                     │
//! │  - store.rs: SnippetStore, the only mutator                 │
//! │  - view.rs: search + filter + sort + pinned-first           │
//! │  - merge.rs: import reconciliation by id                    │
//! │  - normalize.rs: tag/text/title canonicalization            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Ports                                                      │
//! │  - storage/: SnippetStorage (FileStorage, MemStorage)       │
//! │  - clipboard.rs: Clipboard (system tools or unsupported)    │
//! │  - model.rs: IdGenerator                                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Diagnostics go through `tracing`; installing a subscriber is the client's job.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade used by clients
//! - [`commands`]: Operation implementations
//! - [`store`]: Snippet Store
//! - [`view`]: View Builder
//! - [`merge`]: Import Merger
//! - [`normalize`]: Normalization utilities
//! - [`export`]: Backup document
//! - [`model`]: Snippet, Stats, EditRequest, ids
//! - [`storage`]: Persistence port and backends
//! - [`clipboard`]: Clipboard port and strategies
//! - [`config`]: Configuration
//! - [`init`]: Context setup for clients
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod init;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod storage;
pub mod store;
#[cfg(feature = "test_utils")]
pub mod test_utils;
pub mod view;
