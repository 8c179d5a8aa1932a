//! The pair of stores every service runs against.

use std::sync::Arc;

use secrecy::SecretString;
use thiserror::Error;

use crate::config::StorageConfig;
use crate::media::{FsMediaStore, HostedMediaStore, MediaStore};
use crate::postgres::{PgRecordStore, create_pool};
use crate::store::RecordStore;

/// Errors from connecting the backend at startup.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),
}

/// Record store plus media store, cheaply cloneable.
///
/// Constructed once at startup and passed into each service's state.
#[derive(Clone)]
pub struct Backend {
    records: Arc<dyn RecordStore>,
    media: Arc<dyn MediaStore>,
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend").finish_non_exhaustive()
    }
}

impl Backend {
    #[must_use]
    pub fn new(records: Arc<dyn RecordStore>, media: Arc<dyn MediaStore>) -> Self {
        Self { records, media }
    }

    /// Connect `PostgreSQL` and build the configured media store.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Database` if the pool cannot connect.
    pub async fn connect(
        database_url: &SecretString,
        storage: &StorageConfig,
    ) -> Result<Self, BackendError> {
        let pool = create_pool(database_url).await?;
        tracing::info!("Database connection pool created");

        let media: Arc<dyn MediaStore> = match storage {
            StorageConfig::Filesystem { root, public_url } => {
                tracing::info!(root = %root.display(), "Storing uploads on the local filesystem");
                Arc::new(FsMediaStore::new(root, public_url))
            }
            StorageConfig::Hosted {
                url,
                service_key,
                bucket,
            } => {
                tracing::info!(url = %url, bucket = %bucket, "Storing uploads in hosted storage");
                Arc::new(HostedMediaStore::new(url, service_key.clone(), bucket.clone()))
            }
        };

        Ok(Self::new(Arc::new(PgRecordStore::new(pool)), media))
    }

    /// In-memory backend for tests.
    #[cfg(any(test, feature = "memory"))]
    #[must_use]
    pub fn in_memory() -> (
        Self,
        Arc<crate::memory::MemoryRecordStore>,
        Arc<crate::memory::MemoryMediaStore>,
    ) {
        let records = Arc::new(crate::memory::MemoryRecordStore::new());
        let media = Arc::new(crate::memory::MemoryMediaStore::default());
        let backend = Self::new(records.clone(), media.clone());
        (backend, records, media)
    }

    #[must_use]
    pub fn records(&self) -> &dyn RecordStore {
        self.records.as_ref()
    }

    #[must_use]
    pub fn media(&self) -> &dyn MediaStore {
        self.media.as_ref()
    }
}
