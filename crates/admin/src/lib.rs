//! RealTrust admin library.
//!
//! Tabbed managers for the content shown on the landing page (projects and
//! client testimonials) plus read-only views of the leads and newsletter
//! subscribers it collects.
//!
//! There is no authentication. Deploy behind something that restricts who
//! can reach port 3001.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod routes;
pub mod shell;
pub mod state;
pub mod toasts;

use std::path::Path;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::error::AppError;
use crate::state::AppState;

/// Directory holding the admin's CSS and scripts.
pub const STATIC_DIR: &str = "crates/admin/static";

/// Build the admin router.
///
/// `media_root` is served at `/media` when uploads live on the local
/// filesystem, so freshly uploaded images preview in the lists.
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
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
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
