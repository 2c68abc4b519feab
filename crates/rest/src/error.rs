//! Error types for the complaint intake API.
//!
//! All handler failures funnel through [`ApiError`], which translates into
//! the `{success: false, message, error?}` response envelope at a single
//! point. One error per request: the first failure short-circuits.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Validation | 400 |
//! | NotFound | 404 |
//! | Unavailable | 500 |
//! | Internal | 500 |
//!
//! The health endpoint maps connectivity failure to 503 itself rather than
//! going through this type, since its response shape differs.

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use intake_store::StoreError;
use serde_json::json;

use crate::validation::ValidationFailure;

/// The primary error type for API operations.
#[derive(Debug)]
pub enum ApiError {
    /// Client input failed validation (HTTP 400).
    Validation {
        /// Which rule failed, as a user-facing message.
        message: String,
    },

    /// No complaint matches the requested id (HTTP 404).
    NotFound,

    /// The datastore could not be reached (HTTP 500).
    Unavailable {
        /// Underlying error detail.
        message: String,
    },

    /// A datastore operation failed (HTTP 500).
    Internal {
        /// Underlying error detail.
        message: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation { message } => write!(f, "Validation failed: {}", message),
            ApiError::NotFound => write!(f, "Complaint not found"),
            ApiError::Unavailable { message } => write!(f, "Datastore unavailable: {}", message),
            ApiError::Internal { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation { message } => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "message": message }),
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "message": "Complaint not found" }),
            ),
            ApiError::Unavailable { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "success": false,
                    "message": "Service temporarily unavailable",
                    "error": message,
                }),
            ),
            ApiError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "success": false,
                    "message": "Server error",
                    "error": message,
                }),
            ),
        };

        match status.as_u16() {
            400..=499 => tracing::warn!(%status, "client error: {}", self),
            _ => tracing::error!(%status, "server error: {}", self),
        }

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable { message } => ApiError::Unavailable { message },
            StoreError::Backend { message } => ApiError::Internal { message },
        }
    }
}

impl From<ValidationFailure> for ApiError {
    fn from(failure: ValidationFailure) -> Self {
        ApiError::Validation {
            message: failure.message().to_string(),
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
