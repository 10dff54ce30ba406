//! # Storage Layer
//!
//! Persistence is a handful of independent key-value slots, each holding a
//! string. The [`DataStore`] trait only moves those strings in and out;
//! parsing, validation and fallback to defaults live in [`QuoteStore`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one file per slot inside the data directory. Writes go
//!   to a temp file that is renamed over the target, so a slot is never left
//!   half written.
//! - [`memory::InMemoryStore`]: a map, for tests.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── quotes.json         # the collection (JSON array)
//! ├── category            # selected category, plain text
//! └── config.json         # configuration (see config.rs)
//!
//! <runtime or temp dir>/quotez-session/
//! └── last_viewed.json    # last displayed quote, gone after a restart
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod quote_store;

pub use quote_store::QuoteStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// JSON-encoded quote collection.
    Quotes,
    /// Plain-string selected category.
    SelectedCategory,
    /// Session-scoped, JSON-encoded last displayed quote.
    LastViewed,
}

/// Abstract interface for slot storage.
pub trait DataStore {
    /// Read a slot. `Ok(None)` when it has never been written or was cleared.
    fn read(&self, slot: Slot) -> Result<Option<String>>;

    /// Replace the content of a slot.
    fn write(&mut self, slot: Slot, value: &str) -> Result<()>;

    /// Remove a slot. Clearing an absent slot is not an error.
    fn clear(&mut self, slot: Slot) -> Result<()>;
}
