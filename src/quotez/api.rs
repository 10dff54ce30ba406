//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all quotez operations, whatever the UI.
//!
//! It owns the [`QuoteStore`], the loaded configuration and the random source,
//! so there is no ambient state anywhere in the crate: a UI builds one
//! `QuoteApi` at startup and passes it around (or shares it behind a mutex,
//! as [`crate::scheduler::SyncScheduler`] does).
//!
//! The API explicitly avoids business logic (`commands/*.rs`), I/O towards
//! the user, and presentation. It returns `Result<CmdResult>`.
//!
//! ## Generic Over DataStore
//!
//! - Production: `QuoteApi<FileStore>`
//! - Testing: `QuoteApi<InMemoryStore>`

use crate::commands;
use crate::config::QuotezConfig;
use crate::error::Result;
use crate::random::{RandomSource, ThreadRandom};
use crate::remote::RemoteSource;
use crate::store::{DataStore, QuoteStore};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub struct QuoteApi<S: DataStore> {
    store: QuoteStore<S>,
    config: QuotezConfig,
    config_dir: PathBuf,
    rng: Box<dyn RandomSource + Send>,
}

impl<S: DataStore> QuoteApi<S> {
    /// Load the store from `backend` and use `config_dir` for configuration.
    pub fn new(backend: S, config: QuotezConfig, config_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            store: QuoteStore::load(backend)?,
            config,
            config_dir,
            rng: Box::new(ThreadRandom),
        })
    }

    pub fn with_random(mut self, rng: impl RandomSource + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn add_quote(
        &mut self,
        text: &str,
        category: &str,
        author: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, text, category, author)
    }

    pub fn random_quote(&mut self, category: Option<&str>) -> Result<commands::CmdResult> {
        commands::random::run(&mut self.store, category, self.rng.as_mut())
    }

    pub fn show_quote(&mut self) -> Result<commands::CmdResult> {
        commands::random::show(&mut self.store, self.rng.as_mut())
    }

    pub fn list_quotes(&self, category: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, category)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::list(&self.store)
    }

    pub fn select_category(&mut self, category: &str) -> Result<commands::CmdResult> {
        commands::categories::select(&mut self.store, category)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn export(&self, target: ExportTarget) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, target)
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store)
    }

    /// Fetch from `remote` and reconcile. A failed fetch is reported in the
    /// result; only persistence failures are errors.
    pub async fn sync<R: RemoteSource + ?Sized>(
        &mut self,
        remote: &R,
    ) -> Result<commands::CmdResult> {
        debug!(policy = %self.config.merge_policy, "starting sync");
        let fetched = remote.fetch().await;
        commands::sync::run(
            &mut self.store,
            fetched,
            self.config.merge_policy,
            &self.config.server_category,
        )
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let is_set = matches!(action, ConfigAction::Set(..));
        let result = commands::config::run(&self.config_dir, action)?;
        if is_set {
            if let Some(config) = &result.config {
                self.config = config.clone();
            }
        }
        Ok(result)
    }

    /// Interval between periodic syncs, never shorter than one second.
    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.config.sync_interval_secs.max(1))
    }

    pub fn settings(&self) -> &QuotezConfig {
        &self.config
    }

    pub fn store(&self) -> &QuoteStore<S> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::{ExportTarget, DEFAULT_EXPORT_FILENAME};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, SyncReport};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuotezError;
    use crate::merge::MergePolicy;
    use crate::model::{Quote, ALL_CATEGORIES};
    use crate::random::SequenceRandom;
    use crate::store::memory::fixtures::StoreFixture;
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct Fixed(Vec<Quote>);

    #[async_trait]
    impl RemoteSource for Fixed {
        async fn fetch(&self) -> Result<Vec<Quote>> {
            Ok(self.0.clone())
        }
    }

    struct Down;

    #[async_trait]
    impl RemoteSource for Down {
        async fn fetch(&self) -> Result<Vec<Quote>> {
            Err(QuotezError::Remote("offline".into()))
        }
    }

    fn api(dir: &TempDir, quotes: &[Quote]) -> QuoteApi<crate::store::memory::InMemoryStore> {
        let backend = StoreFixture::new().with_quotes(quotes).backend;
        QuoteApi::new(backend, QuotezConfig::default(), dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn random_uses_injected_source() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir, &[Quote::new("1", "A"), Quote::new("2", "A")])
            .with_random(SequenceRandom::new([1, 0]));
        assert_eq!(
            api.random_quote(None).unwrap().displayed,
            Some(Quote::new("2", "A"))
        );
        assert_eq!(
            api.random_quote(None).unwrap().displayed,
            Some(Quote::new("1", "A"))
        );
    }

    #[test]
    fn add_then_list_by_category() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir, &[]);
        api.add_quote("Hello", "Greetings", None).unwrap();
        let listed = api.list_quotes(Some("Greetings")).unwrap().listed_quotes;
        assert_eq!(listed, vec![Quote::new("Hello", "Greetings")]);
    }

    #[test]
    fn config_set_updates_live_settings() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir, &[]);
        api.config(ConfigAction::Set(
            "merge-policy".into(),
            "server-replaces".into(),
        ))
        .unwrap();
        assert_eq!(api.settings().merge_policy, MergePolicy::ServerReplaces);

        api.config(ConfigAction::Set("sync-interval".into(), "5".into()))
            .unwrap();
        assert_eq!(api.sync_interval(), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn sync_merges_remote_quotes() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir, &[Quote::new("B", "Life")]);
        let result = api
            .sync(&Fixed(vec![Quote::new("R", "Server")]))
            .await
            .unwrap();
        assert!(result.sync.unwrap().succeeded());
        assert_eq!(api.store().len(), 2);
        assert_eq!(api.store().filter("Server").len(), 1);
    }

    #[tokio::test]
    async fn sync_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir, &[Quote::new("B", "Life")]);
        let result = api.sync(&Down).await.unwrap();
        assert!(result.has_errors());
        assert_eq!(api.store().len(), 1);
        assert_eq!(api.store().selected_category(), ALL_CATEGORIES);
    }
}
