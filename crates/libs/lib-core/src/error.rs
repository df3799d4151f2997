//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used
//! consistently across all backend modules. It follows the `thiserror`
//! pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Client Errors** (4xx) - User/input issues
//!    - [`MissingFields`](AppError::MissingFields) → 400 Bad Request
//!    - [`Unauthorized`](AppError::Unauthorized) → 401 Unauthorized
//!    - [`InvalidCredentials`](AppError::InvalidCredentials) → 401 Unauthorized
//!    - [`Forbidden`](AppError::Forbidden) → 403 Forbidden
//!    - [`NotFound`](AppError::NotFound) → 404 Not Found
//!    - [`EmailTaken`](AppError::EmailTaken) → 409 Conflict
//!
//! 2. **Server Errors** (5xx) - Internal/system issues
//!    - [`ServerMisconfigured`](AppError::ServerMisconfigured) → 500
//!    - [`Internal`](AppError::Internal) → 500 (catch-all; wraps store and
//!      hashing failures without leaking detail to the caller)
//!
//! Every failure is caught at the request boundary and converted to a status
//! code plus JSON body; none propagate as process crashes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::ErrorResponse;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all request failure scenarios.
#[derive(Debug, Error)]
pub enum AppError {
    /// One or more required request fields are absent or empty.
    ///
    /// **HTTP Status**: 400 Bad Request
    #[error("Missing fields: {0}")]
    MissingFields(String),

    /// A credential record already exists for the requested email.
    ///
    /// **HTTP Status**: 409 Conflict
    #[error("Email already registered")]
    EmailTaken,

    /// Login failed. Unknown email and wrong password deliberately collapse
    /// into this single variant so callers cannot tell which one failed.
    ///
    /// **HTTP Status**: 401 Unauthorized
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Request lacks a valid bearer token (missing header, wrong scheme,
    /// invalid or expired token).
    ///
    /// **HTTP Status**: 401 Unauthorized
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The server cannot authenticate anyone because its signing secret is
    /// not configured. Kept distinct from [`Unauthorized`](Self::Unauthorized)
    /// so operators can tell a broken deployment from a bad client.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Server misconfigured: {0}")]
    ServerMisconfigured(String),

    /// The caller is authenticated but does not own the targeted resource.
    ///
    /// **HTTP Status**: 403 Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Requested resource not found.
    ///
    /// **HTTP Status**: 404 Not Found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error (store unreachable, hashing failure, other
    /// unexpected failures).
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields(_) => StatusCode::BAD_REQUEST,
            AppError::EmailTaken => StatusCode::CONFLICT,
            AppError::InvalidCredentials | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServerMisconfigured(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a user-friendly error message.
    ///
    /// For internal errors, returns a generic message to avoid exposing
    /// implementation details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MissingFields(_) => "Missing fields".to_string(),
            AppError::EmailTaken => "Email already registered".to_string(),
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            AppError::Unauthorized(_) => "Unauthorized".to_string(),
            AppError::Forbidden(_) => "Forbidden".to_string(),
            AppError::NotFound(_) => "Not found".to_string(),
            AppError::ServerMisconfigured(_) | AppError::Internal(_) => {
                "An internal error occurred".to_string()
            }
        }
    }

    /// Stable error code reported in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingFields(_) => "MissingFields",
            AppError::EmailTaken => "EmailTaken",
            AppError::InvalidCredentials => "InvalidCredentials",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::ServerMisconfigured(_) => "ServerMisconfigured",
            AppError::Forbidden(_) => "Forbidden",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) => "Internal",
        }
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        // Full error detail goes to the server log only.
        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("Server error: {}", self);
            }
            _ => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let body = Json(ErrorResponse {
            error: message,
            code: self.code().to_string(),
        });

        (status, body).into_response()
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert `sqlx::Error` to `AppError`.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Database record not found".to_string()),
            sqlx::Error::Database(db_err) => {
                AppError::Internal(format!("Database error: {}", db_err.message()))
            }
            _ => AppError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}
