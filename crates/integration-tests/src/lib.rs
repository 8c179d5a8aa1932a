//! Integration tests for RealTrust.
//!
//! Every test here talks HTTP to already-running servers and is ignored by
//! default.
//!
//! # Running Tests
//!
//! ```bash
//! cargo run -p realtrust-cli -- migrate
//! cargo run -p realtrust-site &
//! cargo run -p realtrust-admin &
//! cargo test -p realtrust-integration-tests -- --ignored
//! ```
//!
//! `SITE_BASE_URL` and `ADMIN_BASE_URL` override the default
//! `http://localhost:3000` and `http://localhost:3001`.

use reqwest::Client;

/// Base URL of the public site.
#[must_use]
pub fn site_base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL of the admin panel.
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// HTTP client that does not follow redirects, so they can be asserted.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// An email address no earlier run has used.
#[must_use]
pub fn unique_email() -> String {
    format!("it-{}@realtrust.test", uuid::Uuid::new_v4().simple())
}
