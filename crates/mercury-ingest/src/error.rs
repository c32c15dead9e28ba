//! Error types for Mercury ingestion
//!
//! Each pipeline component reports failures through [`IngestError`]; the
//! binary translates any error into a nonzero exit status at the top level.

use thiserror::Error;

/// Result type alias for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Error type for the ingestion pipeline
#[derive(Error, Debug)]
pub enum IngestError {
    /// Input file is missing or unreadable. Fatal for the whole run.
    #[error("Input file not found: '{0}'. Verify the path exists and is readable.")]
    FileNotFound(String),

    /// File system operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding of a batch failed
    #[error("Failed to encode batch as CSV: {0}")]
    Encode(#[from] csv::Error),

    /// HTTP client could not be constructed or a request could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The opt-in retry cap was hit before the endpoint accepted a batch
    #[error("Upload failed after {attempts} attempt(s); giving up. Last server response: {last_response}")]
    RetriesExhausted { attempts: u32, last_response: String },

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl IngestError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
