//! RealTrust public site.
//!
//! Serves the landing page on port 3000: hero with a consultation form,
//! about, projects, client testimonials, a contact form and the newsletter
//! bar. Forms post via HTMX and swap their own fragment back in, with the
//! outcome shown as a toast.
//!
//! The library exposes [`app`] so the router can be exercised in tests
//! against an in-memory backend.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod routes;
pub mod sections;
pub mod state;

use std::path::Path;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

/// Directory holding the site's CSS and scripts.
pub const STATIC_DIR: &str = "crates/site/static";

/// Build the site router.
///
/// `media_root` is served at `/media` when uploads live on the local
/// filesystem.
pub fn app(state: AppState, media_root: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR));

    if let Some(root) = media_root {
        router = router.nest_service("/media", ServeDir::new(root));
    }

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the record store is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.backend().records().ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
