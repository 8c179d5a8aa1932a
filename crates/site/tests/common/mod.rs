//! Shared helpers for site router tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use tower::ServiceExt;

use realtrust_data::memory::{MemoryMediaStore, MemoryRecordStore};
use realtrust_data::{Backend, StorageConfig};
use realtrust_site::config::SiteConfig;
use realtrust_site::state::AppState;

pub struct TestApp {
    pub router: Router,
    pub records: Arc<MemoryRecordStore>,
    pub media: Arc<MemoryMediaStore>,
}

pub fn test_config() -> SiteConfig {
    SiteConfig {
        database_url: SecretString::from("postgres://localhost/realtrust_test"),
        host: "127.0.0.1".parse().unwrap(),
        port: 3000,
        admin_url: "http://admin.test".to_string(),
        storage: StorageConfig::Filesystem {
            root: PathBuf::from("media"),
            public_url: "/media".to_string(),
        },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

pub fn build_test_app() -> TestApp {
    let (backend, records, media) = Backend::in_memory();
    let state = AppState::new(test_config(), backend);
    TestApp {
        router: realtrust_site::app(state, None),
        records,
        media,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
