//! Common error types for HBC

use thiserror::Error;

/// Common result type for HBC operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across HBC services
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or setting value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}
