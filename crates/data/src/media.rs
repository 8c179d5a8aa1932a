//! Media storage for uploaded images.
//!
//! Two backends implement [`MediaStore`]:
//!
//! - [`FsMediaStore`] writes under a local directory that the services expose
//!   at `/media`.
//! - [`HostedMediaStore`] talks to a hosted object-storage REST API
//!   (`/storage/v1/object/{bucket}/{path}`) with a service key.
//!
//! Both refuse to overwrite an existing object.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::instrument;
use url::Url;

use realtrust_core::MediaPath;

/// Errors from media uploads.
#[derive(Debug, Error)]
pub enum MediaError {
    /// Local filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An object already exists at the target path.
    #[error("media already exists at {0}")]
    AlreadyExists(String),

    /// Transport failure talking to hosted storage.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Hosted storage rejected the upload.
    #[error("storage API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Object storage for uploaded images.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Store `bytes` at `path`. Never overwrites.
    async fn upload(&self, path: &MediaPath, bytes: Vec<u8>) -> Result<(), MediaError>;

    /// Publicly reachable URL for an object at `path`.
    fn public_url(&self, path: &MediaPath) -> String;
}

// =============================================================================
// Filesystem
// =============================================================================

/// Stores uploads below a local directory.
#[derive(Debug, Clone)]
pub struct FsMediaStore {
    root: PathBuf,
    public_base: String,
}

impl FsMediaStore {
    /// `public_base` is the URL prefix the directory is served under, e.g.
    /// `/media` or `https://cdn.example.com/media`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, public_base: &str) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MediaStore for FsMediaStore {
    #[instrument(skip(self, bytes), fields(path = %path, size = bytes.len()))]
    async fn upload(&self, path: &MediaPath, bytes: Vec<u8>) -> Result<(), MediaError> {
        let target = self.root.join(path.as_str());
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(MediaError::AlreadyExists(path.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        file.write_all(&bytes).await?;
        file.flush().await?;
        Ok(())
    }

    fn public_url(&self, path: &MediaPath) -> String {
        format!("{}/{}", self.public_base, path)
    }
}

// =============================================================================
// Hosted
// =============================================================================

/// Stores uploads in a hosted object-storage bucket.
#[derive(Clone)]
pub struct HostedMediaStore {
    client: reqwest::Client,
    base_url: String,
    service_key: SecretString,
    bucket: String,
}

impl std::fmt::Debug for HostedMediaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedMediaStore")
            .field("base_url", &self.base_url)
            .field("service_key", &"[REDACTED]")
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}

impl HostedMediaStore {
    #[must_use]
    pub fn new(base_url: &Url, service_key: SecretString, bucket: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            service_key,
            bucket: bucket.into(),
        }
    }

    fn object_url(&self, path: &MediaPath) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, path)
    }
}

#[async_trait]
impl MediaStore for HostedMediaStore {
    #[instrument(skip(self, bytes), fields(path = %path, size = bytes.len()))]
    async fn upload(&self, path: &MediaPath, bytes: Vec<u8>) -> Result<(), MediaError> {
        let response = self
            .client
            .post(self.object_url(path))
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.service_key.expose_secret()),
            )
            .header(CONTENT_TYPE, path.content_type())
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if status == StatusCode::CONFLICT {
            return Err(MediaError::AlreadyExists(path.to_string()));
        }

        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %message, "Hosted storage rejected upload");
        Err(MediaError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn public_url(&self, path: &MediaPath) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::DateTime;
    use realtrust_core::MediaKind;

    use super::*;

    fn sample_path() -> MediaPath {
        MediaPath::for_upload(
            MediaKind::Projects,
            "villa.png",
            DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
        )
    }

    fn scratch_dir(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("realtrust-media-{label}-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_fs_upload_writes_file() {
        let root = scratch_dir("write");
        let store = FsMediaStore::new(&root, "/media/");
        let path = sample_path();

        store.upload(&path, b"png-bytes".to_vec()).await.unwrap();

        let written = tokio::fs::read(root.join("projects/1700000000000.png"))
            .await
            .unwrap();
        assert_eq!(written, b"png-bytes");
        assert_eq!(store.public_url(&path), "/media/projects/1700000000000.png");

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn test_fs_upload_never_overwrites() {
        let root = scratch_dir("overwrite");
        let store = FsMediaStore::new(&root, "/media");
        let path = sample_path();

        store.upload(&path, b"first".to_vec()).await.unwrap();
        let second = store.upload(&path, b"second".to_vec()).await;
        assert!(matches!(second, Err(MediaError::AlreadyExists(_))));

        let written = tokio::fs::read(root.join(path.as_str())).await.unwrap();
        assert_eq!(written, b"first");

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[test]
    fn test_hosted_urls() {
        let base = Url::parse("https://abc.storage.example.com/").unwrap();
        let store = HostedMediaStore::new(&base, SecretString::from("key"), "uploads");
        let path = sample_path();

        assert_eq!(
            store.object_url(&path),
            "https://abc.storage.example.com/storage/v1/object/uploads/projects/1700000000000.png"
        );
        assert_eq!(
            store.public_url(&path),
            "https://abc.storage.example.com/storage/v1/object/public/uploads/projects/1700000000000.png"
        );
    }

    #[test]
    fn test_hosted_debug_redacts_key() {
        let base = Url::parse("https://abc.storage.example.com").unwrap();
        let store = HostedMediaStore::new(&base, SecretString::from("super-secret"), "uploads");
        let debug = format!("{store:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
