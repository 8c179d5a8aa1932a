//! Unified error handling.
//!
//! Form workflows never surface as `AppError`: their failures are reported
//! as notices and rendered with `200 OK` so HTMX swaps them in. Store
//! outages on the landing page fall back to placeholder content. What is
//! left is a request for a page that does not exist.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("/nope".to_string());
        assert_eq!(err.to_string(), "Not found: /nope");
    }

    #[test]
    fn test_app_error_status_codes() {
        let status = AppError::NotFound("test".to_string())
            .into_response()
            .status();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
