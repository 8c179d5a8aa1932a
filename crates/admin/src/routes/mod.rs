//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to the Projects tab
//!
//! # Projects
//! GET  /projects               - Projects tab
//! GET  /projects/list          - List fragment (HTMX, loaded on render)
//! POST /projects               - Create (multipart, HTMX)
//! POST /projects/{id}/delete   - Delete (HTMX, returns the list)
//!
//! # Clients
//! GET  /clients                - Clients tab
//! GET  /clients/list           - List fragment
//! POST /clients                - Create (multipart)
//! POST /clients/{id}/delete    - Delete
//!
//! # Read-only
//! GET  /contacts               - Contact submissions
//! GET  /newsletter             - Newsletter subscribers
//! ```
//!
//! Health checks, `/static` and `/media` are mounted in [`crate::app`].

pub mod clients;
pub mod contacts;
pub mod newsletter;
pub mod projects;
pub mod upload;

use axum::{Router, response::Redirect, routing::get};

use crate::state::AppState;

/// Create the admin routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/projects") }))
        .merge(projects::router())
        .merge(clients::router())
        .merge(contacts::router())
        .merge(newsletter::router())
}
