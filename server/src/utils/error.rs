//! Unified error handling
//!
//! Every failure leaving the HTTP layer is rendered as
//!
//! ```json
//! { "success": false, "error": "<message>" }
//! ```
//!
//! with the status code determined by the error class: validation
//! errors are 400, unknown ids 404, store/computation faults 500.
//! Nothing is retried and nothing is silently degraded.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::repository::RepoError;

/// Application error enum
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed request data (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unknown resource id (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Fault talking to the document store (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else inside the boundary (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        AppError::Database(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Error envelope, matching the success envelopes' `success` field
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Store fault");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
