//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! POST /leads/hero             - Consultation form (HTMX fragment)
//! POST /leads/contact          - Contact form (HTMX fragment)
//! POST /newsletter             - Newsletter form (HTMX fragment)
//! ```
//!
//! Health checks, `/static` and `/media` are mounted in [`crate::app`].

pub mod home;
pub mod leads;
pub mod newsletter;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the site routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/leads/hero", post(leads::hero))
        .route("/leads/contact", post(leads::contact))
        .route("/newsletter", post(newsletter::subscribe))
}
