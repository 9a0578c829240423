//! API error handling
//!
//! Typed error kinds translated at the response boundary into the uniform
//! `{error, message}` envelope. Internal faults are logged with their
//! detail but reported to clients with a fixed message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use infra_store::StoreError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input data (400)
    #[error("Invalid data: {0}")]
    Validation(String),

    /// Unknown fund id (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other failure (500); the detail is never sent to the client
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "Invalid data", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", msg),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred.".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
