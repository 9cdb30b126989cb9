//! Error types for sentiment scoring operations

use thiserror::Error;

/// Sentiment scoring specific errors
///
/// An entity with no usable articles is not an error; it is reported through
/// the `NoData` state of its summary.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// Article text was empty or otherwise unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A polarity signal could not score a text
    #[error("Signal {signal} failed: {reason}")]
    SignalComputation {
        signal: String,
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The same entity symbol was supplied twice in one run
    #[error("Duplicate entity in run input: {0}")]
    DuplicateEntity(String),

    /// A per-entity task did not complete
    #[error("Analysis task for {symbol} failed: {reason}")]
    TaskFailed {
        symbol: String,
        reason: String,
    },

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// I/O error while loading configuration
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl SentimentError {
    /// Build a signal failure for the named signal
    pub fn signal(signal: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SignalComputation {
            signal: signal.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error only excludes one article rather than failing a run
    pub fn is_article_level(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::SignalComputation { .. })
    }
}

/// Result type alias for sentiment operations
pub type Result<T> = std::result::Result<T, SentimentError>;

/// Convert anyhow::Error to SentimentError
impl From<anyhow::Error> for SentimentError {
    fn from(err: anyhow::Error) -> Self {
        SentimentError::Other(err.to_string())
    }
}
