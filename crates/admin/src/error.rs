//! Unified error handling for admin.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the admin panel.
///
/// Create and delete failures are reported as toasts and never become a
/// response through this type. A create body that cannot be read ends up as a
/// toast too.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client (e.g. a malformed multipart body).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!(error = %self, status = %status, "Rejected admin request");

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for admin handlers.
pub type Result<T> = std::result::Result<T, AppError>;
