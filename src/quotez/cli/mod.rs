//! # CLI Layer
//!
//! One possible UI client for quotez, and the only place that knows about
//! terminal I/O, argument parsing and process exit codes.
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context setup, logging, dispatch to `QuoteApi`
//! - `print.rs`: turning `CmdResult` values into terminal output

mod commands;
mod print;
mod setup;

pub use commands::run;
