//! Error types for psreview

use thiserror::Error;

/// Result type alias using psreview's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for psreview operations
#[derive(Error, Debug)]
pub enum Error {
    /// Dataset could not be loaded (missing or malformed backing file).
    /// Fatal: the session never starts without a dataset.
    #[error("Failed to load dataset: {0}")]
    Load(String),

    /// Not found error
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Persisting the record set to disk failed
    #[error("Failed to persist dataset: {0}")]
    Persist(String),

    /// Clipboard write failed (non-fatal, surfaced as a notice)
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal UI error
    #[error("TUI error: {0}")]
    Tui(String),

    /// CSV parse/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a load error
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a persist error
    pub fn persist(msg: impl Into<String>) -> Self {
        Self::Persist(msg.into())
    }

    /// Create a clipboard error
    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
