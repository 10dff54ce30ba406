//! # Quotez Architecture
//!
//! Quotez is a **UI-agnostic quote library**: a persisted collection of
//! `{text, category}` records with random display, category filtering,
//! JSON import/export and a periodic sync against a remote endpoint. The
//! command-line binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, handles exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, scheduler.rs)                           │
//! │  - Owns the QuoteStore, config and random source            │
//! │  - Periodic sync shares the API behind a mutex              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - QuoteStore: collection + selected category               │
//! │  - DataStore slots: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Failures that the user should simply be told about (an empty
//! field, a non-array import, a failed fetch) come back as messages inside a
//! `CmdResult`; only storage and filesystem failures are `Err`.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic per operation
//! - [`store`]: `QuoteStore` and the slot backends
//! - [`merge`]: reconciliation of remote batches
//! - [`remote`]: remote quote sources (HTTP)
//! - [`scheduler`]: cancellable periodic sync
//! - [`random`]: injectable random selection
//! - [`model`]: `Quote`, defaults, category index
//! - [`config`]: configuration file
//! - [`init`]: data directory resolution and context setup
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod merge;
pub mod model;
pub mod random;
pub mod remote;
pub mod scheduler;
pub mod store;
