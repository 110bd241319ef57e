//! Application error taxonomy and HTTP response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON error body: `{ "error": "..." }`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Application errors surfaced to HTTP clients.
///
/// Collision during code allocation is not represented here: it is retried
/// internally by the allocator and never reaches a caller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed request input. Maps to `400` with a JSON error body.
    #[error("{message}")]
    Validation { message: String },

    /// Lookup of a short code with no mapping. Maps to `404` with a
    /// plain-text body.
    #[error("{message}")]
    NotFound { message: String },

    /// The allocator exhausted its retry cap without reserving a code.
    #[error("short code allocation exhausted after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },

    /// The key-value backend is unreachable or returned an error.
    #[error("store error: {message}")]
    Store { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { message } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody { error: message }),
            )
                .into_response(),
            AppError::NotFound { message } => {
                (StatusCode::NOT_FOUND, message).into_response()
            }
            AppError::AllocationExhausted { attempts } => {
                tracing::error!(attempts, "short code allocation exhausted");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Failed to allocate a short code".to_string(),
                    }),
                )
                    .into_response()
            }
            AppError::Store { message } => {
                tracing::error!("store error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Storage backend unavailable".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::store(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = AppError::bad_request("URL is required");
        assert_eq!(err.to_string(), "URL is required");
    }

    #[test]
    fn test_allocation_exhausted_display() {
        let err = AppError::AllocationExhausted { attempts: 100 };
        assert_eq!(
            err.to_string(),
            "short code allocation exhausted after 100 attempts"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = AppError::not_found("URL not found");
        assert_eq!(err.to_string(), "URL not found");
    }
}
