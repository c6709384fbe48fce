//! Unified API error handling
//!
//! Bridges store and report errors into HTTP responses. The status mapping
//! lives here at the handler boundary; the core layers know nothing about
//! HTTP.
//!
//! # Error code scheme
//!
//! | Code | Meaning |
//! |------|---------|
//! | E0002 | Validation failed (400) |
//! | E0003 | Resource not found (404) |
//! | E0005 | Constraint violation (422) |
//! | E9xxx | System errors (500) |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::store::RepoError;
use crate::reporting::ReportError;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Corrupt report artifact: {0}")]
    Corrupt(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Constraint(msg) => AppError::Constraint(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::NotFound(date) => {
                AppError::NotFound(format!("Report for {date} not found"))
            }
            ReportError::Io(e) => AppError::Io(e.to_string()),
            ReportError::Corrupt(msg) => AppError::Corrupt(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.clone()),
            AppError::Constraint(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "E0005", msg.clone()),

            // 5xx causes are logged here and masked in the response
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9002",
                    "Database error".to_string(),
                )
            }
            AppError::Io(msg) => {
                error!(target: "reports", error = %msg, "Report storage error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9003",
                    "Report storage error".to_string(),
                )
            }
            AppError::Corrupt(msg) => {
                error!(target: "reports", error = %msg, "Corrupt report artifact");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9004",
                    "Corrupt report artifact".to_string(),
                )
            }
        };

        let body = ErrorBody {
            code: code.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type AppResult<T> = Result<T, AppError>;
