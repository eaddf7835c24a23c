//! Error types for the tabmaker library

use std::io;

/// Library error type for tabmaker operations
#[derive(Debug, thiserror::Error)]
pub enum TabError {
    /// Invalid argument given to a document operation
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Malformed note token
    #[error("parsing error: {0}")]
    ParsingError(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<io::Error> for TabError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error.to_string())
    }
}
