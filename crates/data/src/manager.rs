//! The create-upload-list-delete workflow shared by projects and clients.
//!
//! An [`EntityManager`] never patches a list it has handed out. Every
//! successful mutation is followed by a fresh fetch, and failures leave the
//! table exactly as it was.

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tracing::instrument;

use realtrust_core::{
    Client, ClientId, MediaKind, MediaPath, NewClient, NewProject, Notice, Project, ProjectId,
    Report,
};

use crate::backend::Backend;
use crate::media::MediaError;
use crate::store::{RecordStore, StoreError};

/// A table managed from the admin panel.
#[async_trait]
pub trait ManagedEntity: Sized + Clone + Send + Sync {
    type Id: Copy + Send + Sync + std::fmt::Display;
    type Draft: Send + Sync;

    /// Upload namespace for this entity's images.
    const KIND: MediaKind;
    /// Capitalized singular noun used in notices ("Project").
    const NOUN: &'static str;

    async fn fetch(records: &dyn RecordStore) -> Result<Vec<Self>, StoreError>;
    async fn insert(
        records: &dyn RecordStore,
        draft: &Self::Draft,
        image_url: Option<&str>,
    ) -> Result<Self, StoreError>;
    async fn remove(records: &dyn RecordStore, id: Self::Id) -> Result<(), StoreError>;

    fn id(&self) -> Self::Id;
}

#[async_trait]
impl ManagedEntity for Project {
    type Id = ProjectId;
    type Draft = NewProject;

    const KIND: MediaKind = MediaKind::Projects;
    const NOUN: &'static str = "Project";

    async fn fetch(records: &dyn RecordStore) -> Result<Vec<Self>, StoreError> {
        records.list_projects().await
    }

    async fn insert(
        records: &dyn RecordStore,
        draft: &NewProject,
        image_url: Option<&str>,
    ) -> Result<Self, StoreError> {
        records.insert_project(draft, image_url).await
    }

    async fn remove(records: &dyn RecordStore, id: ProjectId) -> Result<(), StoreError> {
        records.delete_project(id).await
    }

    fn id(&self) -> ProjectId {
        self.id
    }
}

#[async_trait]
impl ManagedEntity for Client {
    type Id = ClientId;
    type Draft = NewClient;

    const KIND: MediaKind = MediaKind::Clients;
    const NOUN: &'static str = "Client";

    async fn fetch(records: &dyn RecordStore) -> Result<Vec<Self>, StoreError> {
        records.list_clients().await
    }

    async fn insert(
        records: &dyn RecordStore,
        draft: &NewClient,
        image_url: Option<&str>,
    ) -> Result<Self, StoreError> {
        records.insert_client(draft, image_url).await
    }

    async fn remove(records: &dyn RecordStore, id: ClientId) -> Result<(), StoreError> {
        records.delete_client(id).await
    }

    fn id(&self) -> ClientId {
        self.id
    }
}

/// An image attached to a create form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// `None` when the browser sent an empty file part (no file chosen).
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Option<Self> {
        let file_name = file_name.into();
        if file_name.is_empty() || bytes.is_empty() {
            return None;
        }
        Some(Self { file_name, bytes })
    }
}

/// Why a create did not go through.
#[derive(Debug, Error)]
pub enum CreateError {
    /// The image could not be stored; nothing was inserted.
    #[error("image upload failed: {0}")]
    Upload(#[from] MediaError),

    /// The row could not be inserted.
    #[error("insert failed: {0}")]
    Insert(#[from] StoreError),
}

/// A successful create: the stored row and the refreshed list.
#[derive(Debug, Clone)]
pub struct Created<E> {
    pub record: E,
    pub items: Vec<E>,
}

/// List, create and delete rows of one managed table.
pub struct EntityManager<'a, E> {
    backend: &'a Backend,
    _entity: std::marker::PhantomData<E>,
}

impl<'a, E: ManagedEntity> EntityManager<'a, E> {
    #[must_use]
    pub const fn new(backend: &'a Backend) -> Self {
        Self {
            backend,
            _entity: std::marker::PhantomData,
        }
    }

    /// The notice reported when a create does not go through.
    #[must_use]
    pub fn create_failed() -> Notice {
        Notice::error(
            "Error",
            format!(
                "Failed to add {}. Please try again.",
                E::NOUN.to_lowercase()
            ),
        )
    }

    /// All rows, newest first. A failed fetch is logged and yields nothing.
    pub async fn list(&self) -> Vec<E> {
        match E::fetch(self.backend.records()).await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(entity = E::NOUN, error = %e, "Failed to fetch list");
                Vec::new()
            }
        }
    }

    /// Upload the image (if any), insert the row, then re-fetch.
    ///
    /// # Errors
    ///
    /// Returns `CreateError::Upload` if the image could not be stored (no row
    /// is inserted) or `CreateError::Insert` if the insert failed. Either way
    /// an error notice has already been reported.
    #[instrument(skip_all, fields(entity = E::NOUN, has_image = image.is_some()))]
    pub async fn create<R: Report + Send>(
        &self,
        draft: &E::Draft,
        image: Option<ImageUpload>,
        report: &mut R,
    ) -> Result<Created<E>, CreateError> {
        match self.try_create(draft, image).await {
            Ok(record) => {
                tracing::info!(id = %record.id(), "Created");
                report.report(Notice::success(
                    "Success!",
                    format!("{} added successfully.", E::NOUN),
                ));
                let items = self.list().await;
                Ok(Created { record, items })
            }
            Err(e) => {
                tracing::error!(error = %e, "Create failed");
                report.report(Self::create_failed());
                Err(e)
            }
        }
    }

    async fn try_create(
        &self,
        draft: &E::Draft,
        image: Option<ImageUpload>,
    ) -> Result<E, CreateError> {
        let image_url = match image {
            Some(image) => {
                let path = MediaPath::for_upload(E::KIND, &image.file_name, Utc::now());
                let media = self.backend.media();
                media.upload(&path, image.bytes).await?;
                Some(media.public_url(&path))
            }
            None => None,
        };

        let record = E::insert(self.backend.records(), draft, image_url.as_deref()).await?;
        Ok(record)
    }

    /// Delete by id, then re-fetch.
    ///
    /// # Errors
    ///
    /// Returns the store error (including `NotFound` for an unknown id) after
    /// reporting an error notice.
    #[instrument(skip_all, fields(entity = E::NOUN, id = %id))]
    pub async fn delete<R: Report + Send>(
        &self,
        id: E::Id,
        report: &mut R,
    ) -> Result<Vec<E>, StoreError> {
        match E::remove(self.backend.records(), id).await {
            Ok(()) => {
                tracing::info!("Deleted");
                report.report(Notice::success(
                    "Deleted",
                    format!("{} removed successfully.", E::NOUN),
                ));
                Ok(self.list().await)
            }
            Err(e) => {
                tracing::error!(error = %e, "Delete failed");
                report.report(Notice::error(
                    "Error",
                    format!("Failed to delete {}.", E::NOUN.to_lowercase()),
                ));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use realtrust_core::{Notices, Severity};

    use super::*;

    fn project(name: &str) -> NewProject {
        NewProject::new(name, "Project design services").unwrap()
    }

    #[tokio::test]
    async fn test_create_without_image_lists_new_row_first() {
        let (backend, _, _) = Backend::in_memory();
        let manager = EntityManager::<Project>::new(&backend);
        let mut notices = Notices::new();

        manager.create(&project("Older"), None, &mut notices).await.unwrap();
        let created = manager
            .create(&project("Newer"), None, &mut notices)
            .await
            .unwrap();

        assert_eq!(created.record.image_url, None);
        assert_eq!(created.items.len(), 2);
        assert_eq!(created.items[0].id, created.record.id);
        assert_eq!(
            created.items.iter().filter(|p| p.id == created.record.id).count(),
            1
        );

        let last = notices.iter().next_back().unwrap();
        assert_eq!(last.severity, Severity::Success);
        assert_eq!(last.message, "Project added successfully.");
    }

    #[tokio::test]
    async fn test_create_with_image_stores_public_url() {
        let (backend, _, media) = Backend::in_memory();
        let manager = EntityManager::<Client>::new(&backend);
        let mut notices = Notices::new();
        let draft = NewClient::new("Lucy", "Sales Director", "Great service").unwrap();
        let image = ImageUpload::new("lucy.PNG", vec![0x89, 0x50]).unwrap();

        let created = manager.create(&draft, Some(image), &mut notices).await.unwrap();

        let paths = media.paths();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].starts_with("clients/"));
        assert!(paths[0].ends_with(".png"));
        assert_eq!(
            created.record.image_url.as_deref(),
            Some(format!("/media/{}", paths[0]).as_str())
        );
    }

    #[tokio::test]
    async fn test_upload_failure_inserts_nothing() {
        let (backend, records, media) = Backend::in_memory();
        media.set_fail_uploads(true);
        let manager = EntityManager::<Project>::new(&backend);
        let mut notices = Notices::new();
        let image = ImageUpload::new("villa.jpg", vec![1, 2, 3]).unwrap();

        let err = manager
            .create(&project("Villa"), Some(image), &mut notices)
            .await
            .unwrap_err();

        assert!(matches!(err, CreateError::Upload(_)));
        assert!(records.list_projects().await.unwrap().is_empty());
        assert!(notices.has_errors());
        assert_eq!(
            notices.iter().next().unwrap().message,
            "Failed to add project. Please try again."
        );
    }

    #[tokio::test]
    async fn test_insert_failure_is_reported() {
        let (backend, records, _) = Backend::in_memory();
        records.set_unavailable(true);
        let manager = EntityManager::<Project>::new(&backend);
        let mut notices = Notices::new();

        let err = manager
            .create(&project("Villa"), None, &mut notices)
            .await
            .unwrap_err();
        assert!(matches!(err, CreateError::Insert(StoreError::Unavailable(_))));
        assert!(notices.has_errors());
    }

    #[tokio::test]
    async fn test_delete_removes_row_and_refetches() {
        let (backend, _, _) = Backend::in_memory();
        let manager = EntityManager::<Project>::new(&backend);
        let mut notices = Notices::new();

        let keep = manager.create(&project("Keep"), None, &mut notices).await.unwrap();
        let gone = manager.create(&project("Gone"), None, &mut notices).await.unwrap();

        let items = manager.delete(gone.record.id, &mut notices).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, keep.record.id);
        assert!(manager.list().await.iter().all(|p| p.id != gone.record.id));

        let last = notices.iter().next_back().unwrap();
        assert_eq!(last.title, "Deleted");
        assert_eq!(last.message, "Project removed successfully.");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_reports_failure() {
        let (backend, _, _) = Backend::in_memory();
        let manager = EntityManager::<Client>::new(&backend);
        let mut notices = Notices::new();

        let err = manager.delete(ClientId::random(), &mut notices).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices.iter().next().unwrap().message, "Failed to delete client.");
    }

    #[tokio::test]
    async fn test_list_failure_yields_empty() {
        let (backend, records, _) = Backend::in_memory();
        let manager = EntityManager::<Client>::new(&backend);
        let mut notices = Notices::new();
        manager
            .create(
                &NewClient::new("Lucy", "Sales Director", "Great").unwrap(),
                None,
                &mut notices,
            )
            .await
            .unwrap();

        records.set_unavailable(true);
        assert!(manager.list().await.is_empty());
    }

    #[test]
    fn test_image_upload_requires_file() {
        assert!(ImageUpload::new("", vec![1]).is_none());
        assert!(ImageUpload::new("a.png", Vec::new()).is_none());
        assert!(ImageUpload::new("a.png", vec![1]).is_some());
    }
}
