//! Custom error types for broeser
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Raw address input that cannot be turned into a URL
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a URL even after scheme prefixing
    #[error("malformed URL")]
    Malformed,
}

/// Main error type for broeser operations
#[derive(Error, Debug)]
pub enum BroeserError {
    /// Address validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for broeser operations
pub type Result<T> = std::result::Result<T, BroeserError>;

impl BroeserError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
