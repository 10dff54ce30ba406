use crate::api::QuoteApi;
use crate::config::QuotezConfig;
use crate::error::{QuotezError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "QUOTEZ_HOME";

/// Environment variable overriding where session state is kept.
pub const SESSION_ENV: &str = "QUOTEZ_SESSION_DIR";

/// Pick the data directory: explicit override first, then `QUOTEZ_HOME`,
/// then the platform data directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "quotez", "quotez")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| QuotezError::Config("Could not determine data directory".to_string()))
}

/// Load settings and quotes from `data_dir` and build the API over them.
pub fn initialize(data_dir: PathBuf) -> Result<QuoteApi<FileStore>> {
    let config = QuotezConfig::load_or_default(&data_dir);

    let mut store = FileStore::new(data_dir.clone());
    if let Some(dir) = std::env::var_os(SESSION_ENV).filter(|v| !v.is_empty()) {
        store = store.with_session_dir(PathBuf::from(dir));
    }
    let api = QuoteApi::new(store, config, data_dir.clone())?;
    tracing::debug!(data_dir = %data_dir.display(), quotes = api.store().len(), "initialized");

    Ok(api)
}
