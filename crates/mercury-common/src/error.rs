//! Error types shared across Mercury components

use thiserror::Error;

/// Result type alias for cross-crate Mercury operations
pub type Result<T> = std::result::Result<T, MercuryError>;

/// Shared error type for failures not specific to one tool
#[derive(Error, Debug)]
pub enum MercuryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl MercuryError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}
