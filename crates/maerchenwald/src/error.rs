//! Error-to-response mapping for the HTTP boundary.
//!
//! Errors never cross the boundary unmapped: every failing code path
//! renders as a JSON envelope `{ "error": ... }` with an explicit status
//! code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use maerchenwald_core::feedback::ValidationError;
use maerchenwald_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::config::ConfigError;

/// JSON error envelope returned by every failing code path.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error carrying the status code and message for its envelope.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    /// Internal error with a generic message. The cause is logged at the
    /// point of failure, never leaked to the client.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal Server Error".to_string(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        tracing::error!(error = %err, "repository operation failed");

        let status = StatusCode::from_u16(repository_error_to_status_code(&err))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            Self::internal()
        } else {
            Self {
                status,
                message: err.to_string(),
            }
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        tracing::error!(error = %err, "configuration error");
        Self::internal()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
