use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Listing failed for {path}: {reason}")]
    Listing { path: String, reason: String },

    #[error("Fetch failed for {path}: {reason}")]
    Fetch { path: String, reason: String },

    #[error("HTTP error {status}: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid export config: {0}")]
    InvalidConfig(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn listing(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Listing {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn fetch(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fetch {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
