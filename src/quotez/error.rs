use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotezError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Validation(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for QuotezError {
    fn from(err: reqwest::Error) -> Self {
        QuotezError::Remote(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuotezError>;
