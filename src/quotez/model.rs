use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Category value meaning "no filter applied".
pub const ALL_CATEGORIES: &str = "all";

/// Built-in collection used on first run, on malformed storage and on reset.
pub static DEFAULT_QUOTES: Lazy<Vec<Quote>> = Lazy::new(|| {
    vec![
        Quote::new(
            "The best way to predict the future is to create it.",
            "Motivation",
        ),
        Quote::new(
            "In the middle of difficulty lies opportunity.",
            "Inspiration",
        ),
        Quote::new("Stay hungry, stay foolish.", "Life"),
        Quote::new("Success is not final; failure is not fatal.", "Success"),
    ]
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Quote {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            author: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Builds a quote from an arbitrary parsed JSON value.
    ///
    /// Accepts objects whose `text` and `category` are strings that are not
    /// blank. A string `author` is kept; any other `author` value is ignored.
    /// Unknown fields are ignored. Returns `None` for anything else.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let text = obj.get("text")?.as_str()?;
        let category = obj.get("category")?.as_str()?;
        if text.trim().is_empty() || category.trim().is_empty() {
            return None;
        }
        let author = obj
            .get("author")
            .and_then(Value::as_str)
            .map(str::to_string);
        Some(Self {
            text: text.to_string(),
            category: category.to_string(),
            author,
        })
    }
}

/// Distinct categories of `quotes`, sorted lexicographically.
pub fn category_index(quotes: &[Quote]) -> Vec<String> {
    quotes
        .iter()
        .map(|q| q.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
