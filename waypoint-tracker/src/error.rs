//! Error types for talking to the remote service

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Failure of a read against the remote service
///
/// Hydration matches on this and keeps local state for every variant.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response: {0}")]
    Parse(String),
}

/// Failure of a mutation pushed to the remote service
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Rejected input (400)
    #[error("Rejected: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Remote relational store unreachable or unconfigured (503)
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Remote error {status}: {message}")]
    Server { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] FetchError),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl RemoteError {
    /// Classify a non-success response by status, using its `{error}` body as message
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.trim().to_string());

        match status {
            StatusCode::BAD_REQUEST => RemoteError::Validation(message),
            StatusCode::NOT_FOUND => RemoteError::NotFound(message),
            StatusCode::SERVICE_UNAVAILABLE => RemoteError::Unavailable(message),
            other => RemoteError::Server {
                status: other.as_u16(),
                message,
            },
        }
    }
}
