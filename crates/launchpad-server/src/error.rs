//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes, logging one line per failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use launchpad_core::CoreError;
use launchpad_storage::StorageError;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Launch not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Undecodable body or failed validation (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> ApiErrorDetail {
        let (code, message) = match self {
            ApiError::NotFound(msg) => ("NOT_FOUND", msg),
            ApiError::BadRequest(msg) => ("BAD_REQUEST", msg),
            ApiError::InternalError(msg) => ("INTERNAL_ERROR", msg),
        };
        ApiErrorDetail {
            code: code.to_string(),
            message: message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self);
        }

        let body = serde_json::json!({
            "success": false,
            "error": self.detail(),
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput | CoreError::InvalidTimeFormat => {
                ApiError::BadRequest(err.to_string())
            }
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match &err {
            StorageError::NotFound(_) => ApiError::NotFound("Launch not found".to_string()),
        }
    }
}
