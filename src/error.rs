//! HTTP-facing error type for the shortening and redirect endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::repositories::StorageError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller's fault: missing or malformed input, or an unusable stored target.
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// The key is absent or the path carries no key.
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// The storage facade could not be reached or refused the write.
    #[error("{message}")]
    Unavailable { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unavailable { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Unavailable { message, details } => {
                ("storage_unavailable", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

/// Maps a failed [`crate::domain::repositories::StorageClient::fetch`] to an HTTP error.
///
/// A missing key stays distinguishable from an unreachable facade.
pub fn map_storage_error(e: StorageError, key: &str) -> AppError {
    match e {
        StorageError::NotFound { .. } => {
            AppError::not_found("Short link not found", json!({ "key": key }))
        }
        StorageError::Decode(reason) => AppError::internal(
            "Stored record is malformed",
            json!({ "key": key, "reason": reason }),
        ),
        StorageError::Transport(_)
        | StorageError::Persist { .. }
        | StorageError::Upstream { .. }
        | StorageError::Configuration(_) => AppError::unavailable(
            "Backing storage service unreachable",
            json!({ "key": key, "reason": e.to_string() }),
        ),
    }
}
