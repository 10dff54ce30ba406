use crate::config::QuotezConfig;
use crate::model::Quote;
use chrono::{DateTime, Utc};

pub mod add;
pub mod categories;
pub mod config;
pub mod export;
pub mod import;
pub mod list;
pub mod random;
pub mod reset;
pub mod sync;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of one sync cycle.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub fetched: usize,
    pub before: usize,
    pub after: usize,
    pub finished_at: DateTime<Utc>,
    pub error: Option<String>,
}

impl SyncReport {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Quote shown to the user (random pick, newly added quote, ...)
    pub displayed: Option<Quote>,
    pub listed_quotes: Vec<Quote>,
    pub categories: Vec<String>,
    pub selected_category: Option<String>,
    pub config: Option<QuotezConfig>,
    /// Export payload when it is not written to a file
    pub exported: Option<String>,
    pub imported: usize,
    pub sync: Option<SyncReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_displayed(mut self, quote: Quote) -> Self {
        self.displayed = Some(quote);
        self
    }

    pub fn with_listed_quotes(mut self, quotes: Vec<Quote>) -> Self {
        self.listed_quotes = quotes;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>, selected: &str) -> Self {
        self.categories = categories;
        self.selected_category = Some(selected.to_string());
        self
    }

    pub fn with_config(mut self, config: QuotezConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_sync(mut self, report: SyncReport) -> Self {
        self.sync = Some(report);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
