use super::{DataStore, Slot};
use crate::error::{QuotezError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    slots: HashMap<Slot, String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, for error-path tests.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl DataStore for InMemoryStore {
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        Ok(self.slots.get(&slot).cloned())
    }

    fn write(&mut self, slot: Slot, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(QuotezError::Store("Simulated write error".to_string()));
        }
        self.slots.insert(slot, value.to_string());
        Ok(())
    }

    fn clear(&mut self, slot: Slot) -> Result<()> {
        self.slots.remove(&slot);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Quote;
    use crate::store::QuoteStore;

    pub struct StoreFixture {
        pub backend: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                backend: InMemoryStore::new(),
            }
        }

        /// Seed the quotes slot with exactly these quotes.
        pub fn with_quotes(mut self, quotes: &[Quote]) -> Self {
            let raw = serde_json::to_string(quotes).unwrap();
            self.backend.write(Slot::Quotes, &raw).unwrap();
            self
        }

        /// Seed the quotes slot with `count` quotes in `category`.
        pub fn with_numbered(self, count: usize, category: &str) -> Self {
            let quotes: Vec<Quote> = (1..=count)
                .map(|i| Quote::new(format!("Quote {}", i), category))
                .collect();
            self.with_quotes(&quotes)
        }

        pub fn with_raw_quotes(mut self, raw: &str) -> Self {
            self.backend.write(Slot::Quotes, raw).unwrap();
            self
        }

        pub fn with_selected(mut self, category: &str) -> Self {
            self.backend
                .write(Slot::SelectedCategory, category)
                .unwrap();
            self
        }

        pub fn load(self) -> QuoteStore<InMemoryStore> {
            QuoteStore::load(self.backend).unwrap()
        }
    }
}
