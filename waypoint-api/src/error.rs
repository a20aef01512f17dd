//! Error types for waypoint-api
//!
//! Every error response carries a JSON body `{ "error": "<message>" }`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing/invalid field or malformed body (400)
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found (404)
    #[error("{0}")]
    NotFound(String),

    /// Relational store unreachable or unconfigured (503)
    #[error("{0}")]
    Unavailable(String),

    /// Internal server error (500)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Database failure on an event or travel route
    pub fn internal_db(err: sqlx::Error) -> Self {
        error!("Database error: {}", err);
        ApiError::Internal("Internal server error".to_string())
    }

    /// Database failure on a member or relationship route
    ///
    /// Connection-level failures mean the store is unreachable (503).
    pub fn store_db(err: sqlx::Error) -> Self {
        error!("Database error: {}", err);
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => {
                ApiError::Unavailable("Database unavailable".to_string())
            }
            _ => ApiError::Internal("Internal server error".to_string()),
        }
    }
}

impl From<waypoint_common::Error> for ApiError {
    fn from(err: waypoint_common::Error) -> Self {
        match err {
            waypoint_common::Error::Validation(msg) => ApiError::BadRequest(msg),
            waypoint_common::Error::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Unavailable("x".into()).status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ApiError::Internal("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError = waypoint_common::Error::Validation("Missing required fields: title".into()).into();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m.contains("title")));
    }

    #[test]
    fn test_pool_timeout_is_unavailable_for_members() {
        assert!(matches!(ApiError::store_db(sqlx::Error::PoolTimedOut), ApiError::Unavailable(_)));
        assert!(matches!(ApiError::internal_db(sqlx::Error::PoolTimedOut), ApiError::Internal(_)));
    }
}
