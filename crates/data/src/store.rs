//! The record store seam.

use async_trait::async_trait;
use thiserror::Error;

use realtrust_core::{
    Client, ClientId, ContactSubmission, Email, NewClient, NewContactSubmission, NewProject,
    NewsletterSubscriber, Project, ProjectId,
};

/// Errors that can occur during record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested row was not found.
    #[error("not found")]
    NotFound,

    /// A unique constraint rejected the insert (e.g. a subscriber email).
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// The store cannot be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Classify an error raised by an insert.
    ///
    /// Postgres reports duplicate keys with SQLSTATE 23505; that case is
    /// lifted into [`StoreError::UniqueViolation`] so callers can match on it
    /// without knowing the driver.
    #[must_use]
    pub fn from_insert(err: sqlx::Error) -> Self {
        if let Some(db) = err.as_database_error() {
            if db.is_unique_violation() {
                let constraint = db.constraint().unwrap_or("unique").to_string();
                return Self::UniqueViolation(constraint);
            }
        }
        Self::Database(err)
    }

    /// Whether this is a duplicate-key rejection.
    #[must_use]
    pub const fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation(_))
    }
}

/// Table access for every RealTrust entity.
///
/// Lists are ordered newest first (`created_at DESC`, ties broken by id).
/// Inserts return the stored row with its store-assigned id and timestamp.
/// Deletes fail with [`StoreError::NotFound`] when no row matched.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;
    async fn insert_project(
        &self,
        draft: &NewProject,
        image_url: Option<&str>,
    ) -> Result<Project, StoreError>;
    async fn delete_project(&self, id: ProjectId) -> Result<(), StoreError>;

    async fn list_clients(&self) -> Result<Vec<Client>, StoreError>;
    async fn insert_client(
        &self,
        draft: &NewClient,
        image_url: Option<&str>,
    ) -> Result<Client, StoreError>;
    async fn delete_client(&self, id: ClientId) -> Result<(), StoreError>;

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError>;
    async fn insert_contact_submission(
        &self,
        draft: &NewContactSubmission,
    ) -> Result<ContactSubmission, StoreError>;

    async fn list_subscribers(&self) -> Result<Vec<NewsletterSubscriber>, StoreError>;
    async fn insert_subscriber(&self, email: &Email) -> Result<NewsletterSubscriber, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_stay_database() {
        let err = StoreError::from_insert(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(sqlx::Error::RowNotFound)));
        assert!(!err.is_unique_violation());
    }

    #[test]
    fn test_unique_violation_predicate() {
        assert!(StoreError::UniqueViolation("newsletter_subscribers_email_key".into())
            .is_unique_violation());
        assert!(!StoreError::NotFound.is_unique_violation());
    }
}
