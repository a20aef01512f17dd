//! Common error types for Waypoint

use thiserror::Error;

/// Common result type for Waypoint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the tracker and the API service
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error (wraps serde_json::Error)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or invalid required field on create/update
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True for errors the caller should report as a 400-equivalent
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
