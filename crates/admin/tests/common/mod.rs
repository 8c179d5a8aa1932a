//! Shared helpers for admin router tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use tower::ServiceExt;

use realtrust_admin::config::AdminConfig;
use realtrust_admin::state::AppState;
use realtrust_data::memory::{MemoryMediaStore, MemoryRecordStore};
use realtrust_data::{Backend, StorageConfig};

const BOUNDARY: &str = "realtrust-test-boundary";

pub struct TestApp {
    pub router: Router,
    pub records: Arc<MemoryRecordStore>,
    pub media: Arc<MemoryMediaStore>,
}

pub fn test_config() -> AdminConfig {
    AdminConfig {
        database_url: SecretString::from("postgres://localhost/realtrust_test"),
        host: "127.0.0.1".parse().unwrap(),
        port: 3001,
        site_url: "http://site.test".to_string(),
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
        router: realtrust_admin::app(state, None),
        records,
        media,
    }
}

/// A file part of a multipart body.
pub struct FilePart<'a> {
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub bytes: &'a [u8],
}

/// Hand-built `multipart/form-data` body: text fields, then the `image` part.
pub fn multipart_body(fields: &[(&str, &str)], image: Option<FilePart<'_>>) -> Vec<u8> {
    let mut head = String::new();
    for (name, value) in fields {
        write!(
            head,
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
        .unwrap();
    }

    let mut body = head.into_bytes();
    if let Some(file) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                file.file_name, file.content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
