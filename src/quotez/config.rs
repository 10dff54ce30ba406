use crate::error::{QuotezError, Result};
use crate::merge::MergePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_SYNC_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_FETCH_LIMIT: usize = 5;
pub const DEFAULT_SERVER_CATEGORY: &str = "Server";

/// Keys accepted by [`QuotezConfig::get`] and [`QuotezConfig::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "sync-url",
    "sync-interval",
    "sync-timeout",
    "fetch-limit",
    "server-category",
    "merge-policy",
];

/// Configuration for quotez, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotezConfig {
    /// Endpoint returning a JSON array of records with a `title` field
    #[serde(default = "default_sync_url")]
    pub sync_url: String,

    /// Seconds between two periodic syncs
    #[serde(default = "default_sync_interval")]
    pub sync_interval_secs: u64,

    /// Upper bound on a single remote fetch, 0 disables it
    #[serde(default)]
    pub sync_timeout_secs: u64,

    /// How many remote records are taken per sync
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: usize,

    /// Category given to every remote quote
    #[serde(default = "default_server_category")]
    pub server_category: String,

    #[serde(default)]
    pub merge_policy: MergePolicy,
}

fn default_sync_url() -> String {
    DEFAULT_SYNC_URL.to_string()
}

fn default_sync_interval() -> u64 {
    DEFAULT_SYNC_INTERVAL_SECS
}

fn default_fetch_limit() -> usize {
    DEFAULT_FETCH_LIMIT
}

fn default_server_category() -> String {
    DEFAULT_SERVER_CATEGORY.to_string()
}

impl Default for QuotezConfig {
    fn default() -> Self {
        Self {
            sync_url: default_sync_url(),
            sync_interval_secs: DEFAULT_SYNC_INTERVAL_SECS,
            sync_timeout_secs: 0,
            fetch_limit: DEFAULT_FETCH_LIMIT,
            server_category: default_server_category(),
            merge_policy: MergePolicy::default(),
        }
    }
}

impl QuotezConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILENAME)
    }

    /// Read `config.json` from `data_dir`. A missing file means defaults;
    /// an unreadable or malformed one is an error.
    pub fn load(data_dir: &Path) -> Result<Self> {
        match fs::read_to_string(Self::path(data_dir)) {
            Ok(content) => serde_json::from_str(&content).map_err(QuotezError::Serialization),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(QuotezError::Io(e)),
        }
    }

    /// Like [`QuotezConfig::load`], but a broken file yields the defaults so
    /// that `config <key> <value>` can still overwrite it.
    pub fn load_or_default(data_dir: &Path) -> Self {
        Self::load(data_dir).unwrap_or_else(|e| {
            warn!(error = %e, path = %Self::path(data_dir).display(), "unreadable config, using defaults");
            Self::default()
        })
    }

    pub fn save(&self, data_dir: &Path) -> Result<()> {
        fs::create_dir_all(data_dir).map_err(QuotezError::Io)?;
        let content = serde_json::to_string_pretty(self).map_err(QuotezError::Serialization)?;

        let tmp = data_dir.join(format!(".config-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content).map_err(QuotezError::Io)?;
        fs::rename(&tmp, Self::path(data_dir)).map_err(QuotezError::Io)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sync-url" => Some(self.sync_url.clone()),
            "sync-interval" => Some(self.sync_interval_secs.to_string()),
            "sync-timeout" => Some(self.sync_timeout_secs.to_string()),
            "fetch-limit" => Some(self.fetch_limit.to_string()),
            "server-category" => Some(self.server_category.clone()),
            "merge-policy" => Some(self.merge_policy.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "sync-url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(format!("sync-url must be an http(s) URL, got '{}'", value));
                }
                self.sync_url = value.to_string();
            }
            "sync-interval" => {
                let secs = parse_number::<u64>(key, value)?;
                if secs == 0 {
                    return Err("sync-interval must be at least 1 second".to_string());
                }
                self.sync_interval_secs = secs;
            }
            "sync-timeout" => self.sync_timeout_secs = parse_number(key, value)?,
            "fetch-limit" => self.fetch_limit = parse_number(key, value)?,
            "server-category" => {
                if value.is_empty() {
                    return Err("server-category cannot be empty".to_string());
                }
                self.server_category = value.to_string();
            }
            "merge-policy" => self.merge_policy = value.parse()?,
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> std::result::Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{} expects a non-negative number, got '{}'", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = QuotezConfig::default();
        assert_eq!(config.sync_interval_secs, 30);
        assert_eq!(config.fetch_limit, 5);
        assert_eq!(config.server_category, "Server");
        assert_eq!(config.merge_policy, MergePolicy::LocalWins);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = QuotezConfig::load(dir.path()).unwrap();
        assert_eq!(config, QuotezConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"merge_policy":"server-replaces"}"#,
        )
        .unwrap();
        let config = QuotezConfig::load(dir.path()).unwrap();
        assert_eq!(config.merge_policy, MergePolicy::ServerReplaces);
        assert_eq!(config.sync_url, DEFAULT_SYNC_URL);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");

        let mut config = QuotezConfig::default();
        config.set("fetch-limit", "10").unwrap();
        config.save(&nested).unwrap();

        let loaded = QuotezConfig::load(&nested).unwrap();
        assert_eq!(loaded.fetch_limit, 10);
    }

    #[test]
    fn test_broken_file_is_an_error_unless_defaulted() {
        let dir = TempDir::new().unwrap();
        fs::write(QuotezConfig::path(dir.path()), "{not json").unwrap();

        assert!(matches!(
            QuotezConfig::load(dir.path()),
            Err(QuotezError::Serialization(_))
        ));
        assert_eq!(QuotezConfig::load_or_default(dir.path()), QuotezConfig::default());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = QuotezConfig::default();
        assert!(config.set("sync-interval", "0").is_err());
        assert!(config.set("sync-interval", "soon").is_err());
        assert!(config.set("sync-url", "ftp://x").is_err());
        assert!(config.set("server-category", " ").is_err());
        assert!(config.set("merge-policy", "random").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, QuotezConfig::default());
    }

    #[test]
    fn test_get_every_key() {
        let config = QuotezConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(config.get("merge-policy").as_deref(), Some("local-wins"));
        assert_eq!(config.get("nope"), None);
    }
}
