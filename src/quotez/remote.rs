//! Remote quote sources.
//!
//! The sync endpoint is treated as an opaque collection of generic records:
//! only the first `fetch_limit` entries are used, and each one contributes its
//! `title` as quote text, tagged with the configured server category.

use crate::config::QuotezConfig;
use crate::error::{QuotezError, Result};
use crate::model::Quote;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait RemoteSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Quote>>;
}

pub struct HttpRemote {
    client: reqwest::Client,
    url: String,
    fetch_limit: usize,
    category: String,
    timeout: Option<Duration>,
}

impl HttpRemote {
    pub fn new(url: impl Into<String>, fetch_limit: usize, category: impl Into<String>) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(concat!(
                "quotez/",
                env!("CARGO_PKG_VERSION")
            )),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
            fetch_limit,
            category: category.into(),
            timeout: None,
        })
    }

    pub fn from_config(config: &QuotezConfig) -> Result<Self> {
        let remote = Self::new(
            config.sync_url.clone(),
            config.fetch_limit,
            config.server_category.clone(),
        )?;
        Ok(match config.sync_timeout_secs {
            0 => remote,
            secs => remote.with_timeout(Duration::from_secs(secs)),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RemoteSource for HttpRemote {
    async fn fetch(&self) -> Result<Vec<Quote>> {
        debug!(url = %self.url, "fetching remote quotes");

        let mut request = self.client.get(&self.url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuotezError::Remote(format!(
                "{} returned {}",
                self.url, status
            )));
        }

        let body: Value = response.json().await?;
        records_to_quotes(&body, self.fetch_limit, &self.category)
    }
}

/// Map the first `limit` records of a JSON array to quotes. Records without a
/// non-blank string `title` are skipped.
pub fn records_to_quotes(body: &Value, limit: usize, category: &str) -> Result<Vec<Quote>> {
    let records = body
        .as_array()
        .ok_or_else(|| QuotezError::Remote("Expected a JSON array of records".to_string()))?;

    Ok(records
        .iter()
        .take(limit)
        .filter_map(|record| record.get("title").and_then(Value::as_str))
        .filter(|title| !title.trim().is_empty())
        .map(|title| Quote::new(title, category))
        .collect())
}
