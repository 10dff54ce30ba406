use super::{DataStore, Slot};
use crate::error::{QuotezError, Result};
use crate::merge::{reconcile, MergePolicy};
use crate::model::{category_index, Quote, ALL_CATEGORIES, DEFAULT_QUOTES};
use crate::random::{pick, RandomSource};
use serde_json::Value;
use tracing::{debug, warn};

/// Owns the quote collection and the selected category, and writes both
/// through to a [`DataStore`] on every mutation.
pub struct QuoteStore<S: DataStore> {
    backend: S,
    quotes: Vec<Quote>,
    selected: String,
}

impl<S: DataStore> QuoteStore<S> {
    /// Build the store from persisted state.
    ///
    /// A missing or malformed collection is replaced by the default set, which
    /// is persisted right away. Entries that do not look like quotes are
    /// dropped. Only backend I/O failures are returned as errors.
    pub fn load(backend: S) -> Result<Self> {
        let mut store = Self {
            backend,
            quotes: Vec::new(),
            selected: ALL_CATEGORIES.to_string(),
        };

        match store.read_persisted_quotes()? {
            Some(quotes) => store.quotes = quotes,
            None => store.commit(DEFAULT_QUOTES.clone())?,
        }

        if let Some(raw) = store.backend.read(Slot::SelectedCategory)? {
            store.selected = raw.trim().to_string();
        }
        store.refresh_selection()?;

        Ok(store)
    }

    fn read_persisted_quotes(&self) -> Result<Option<Vec<Quote>>> {
        let Some(raw) = self.backend.read(Slot::Quotes)? else {
            debug!("no persisted quotes, using defaults");
            return Ok(None);
        };

        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                warn!("persisted quotes are not an array, restoring defaults");
                return Ok(None);
            }
            Err(e) => {
                warn!(error = %e, "persisted quotes are not valid JSON, restoring defaults");
                return Ok(None);
            }
        };

        let quotes: Vec<Quote> = items.iter().filter_map(Quote::from_value).collect();
        if quotes.len() != items.len() {
            warn!(
                dropped = items.len() - quotes.len(),
                "ignored malformed entries in persisted quotes"
            );
        }
        Ok(Some(quotes))
    }

    /// Write `quotes` to the quotes slot and adopt them only once the write
    /// went through, so memory never runs ahead of disk.
    fn commit(&mut self, quotes: Vec<Quote>) -> Result<()> {
        let raw = serde_json::to_string(&quotes).map_err(QuotezError::Serialization)?;
        self.backend.write(Slot::Quotes, &raw)?;
        self.quotes = quotes;
        Ok(())
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn add(&mut self, text: &str, category: &str, author: Option<&str>) -> Result<Quote> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() || category.is_empty() {
            return Err(QuotezError::Validation(
                "Please enter both quote text and category.".to_string(),
            ));
        }

        let mut quote = Quote::new(text, category);
        if let Some(author) = author.map(str::trim).filter(|a| !a.is_empty()) {
            quote.author = Some(author.to_string());
        }

        let mut next = self.quotes.clone();
        next.push(quote.clone());
        self.commit(next)?;
        Ok(quote)
    }

    /// Quotes in `category`, in insertion order. `"all"` returns everything.
    pub fn filter(&self, category: &str) -> Vec<Quote> {
        if category == ALL_CATEGORIES {
            return self.quotes.clone();
        }
        self.quotes
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect()
    }

    pub fn pick_random<R: RandomSource + ?Sized>(
        &self,
        category: &str,
        rng: &mut R,
    ) -> Option<Quote> {
        let pool = self.filter(category);
        pick(&pool, rng).cloned()
    }

    /// Append every entry of `raw` that has the shape of a quote, persist,
    /// and return how many were accepted.
    pub fn import_batch(&mut self, raw: &[Value]) -> Result<usize> {
        let valid: Vec<Quote> = raw.iter().filter_map(Quote::from_value).collect();
        let accepted = valid.len();
        if accepted > 0 {
            let mut next = self.quotes.clone();
            next.extend(valid);
            self.commit(next)?;
        }
        debug!(offered = raw.len(), accepted, "import batch");
        Ok(accepted)
    }

    /// Pretty-printed JSON array of the whole collection.
    pub fn export_all(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.quotes).map_err(QuotezError::Serialization)
    }

    /// Fold a remote batch into the collection and persist the result.
    pub fn apply_remote(
        &mut self,
        remote: &[Quote],
        policy: MergePolicy,
        server_category: &str,
    ) -> Result<()> {
        let merged = reconcile(&self.quotes, remote, policy, server_category);
        debug!(
            before = self.quotes.len(),
            remote = remote.len(),
            after = merged.len(),
            %policy,
            "reconciled"
        );
        self.commit(merged)?;
        self.refresh_selection()
    }

    pub fn categories(&self) -> Vec<String> {
        category_index(&self.quotes)
    }

    pub fn selected_category(&self) -> &str {
        &self.selected
    }

    /// Select `"all"` or an existing category and persist the choice.
    pub fn select_category(&mut self, category: &str) -> Result<()> {
        let category = category.trim();
        if category != ALL_CATEGORIES && !self.has_category(category) {
            return Err(QuotezError::Validation(format!(
                "Unknown category: {}",
                category
            )));
        }
        self.selected = category.to_string();
        self.backend.write(Slot::SelectedCategory, &self.selected)
    }

    /// Replace the collection with the defaults, clear the selection and
    /// forget the last viewed quote.
    pub fn reset(&mut self) -> Result<()> {
        self.commit(DEFAULT_QUOTES.clone())?;
        self.selected = ALL_CATEGORIES.to_string();
        self.backend.write(Slot::SelectedCategory, &self.selected)?;
        self.backend.clear(Slot::LastViewed)
    }

    /// Last displayed quote from the session slot. Unreadable content counts
    /// as absent.
    pub fn last_viewed(&self) -> Result<Option<Quote>> {
        let Some(raw) = self.backend.read(Slot::LastViewed)? else {
            return Ok(None);
        };
        Ok(serde_json::from_str::<Value>(&raw)
            .ok()
            .as_ref()
            .and_then(Quote::from_value))
    }

    pub fn remember_viewed(&mut self, quote: &Quote) -> Result<()> {
        let raw = serde_json::to_string(quote).map_err(QuotezError::Serialization)?;
        self.backend.write(Slot::LastViewed, &raw)
    }

    fn has_category(&self, category: &str) -> bool {
        self.quotes.iter().any(|q| q.category == category)
    }

    /// Fall back to `"all"` when the selected category no longer exists.
    fn refresh_selection(&mut self) -> Result<()> {
        if self.selected == ALL_CATEGORIES || self.has_category(&self.selected) {
            return Ok(());
        }
        debug!(selected = %self.selected, "selected category vanished, resetting");
        self.selected = ALL_CATEGORIES.to_string();
        self.backend.write(Slot::SelectedCategory, &self.selected)
    }
}
