//! `PostgreSQL` record store.
//!
//! Queries are checked at runtime (`sqlx::query_as` with `FromRow` rows), so
//! building the workspace never needs a live database.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use realtrust_core::{
    Client, ClientId, ContactSubmission, ContactSubmissionId, Email, NewClient,
    NewContactSubmission, NewProject, NewsletterSubscriber, Project, ProjectId, SubscriberId,
};

use crate::store::{RecordStore, StoreError};

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Record store backed by a `PostgreSQL` pool.
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// =============================================================================
// Row types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    name: String,
    description: String,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: ProjectId::new(row.id),
            name: row.name,
            description: row.description,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ClientRow {
    id: Uuid,
    name: String,
    designation: String,
    description: String,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: ClientId::new(row.id),
            name: row.name,
            designation: row.designation,
            description: row.description,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ContactSubmissionRow {
    id: Uuid,
    full_name: String,
    email: String,
    mobile: String,
    city: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContactSubmissionRow> for ContactSubmission {
    type Error = StoreError;

    fn try_from(row: ContactSubmissionRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email)
            .map_err(|e| StoreError::DataCorruption(format!("invalid email in database: {e}")))?;

        Ok(Self {
            id: ContactSubmissionId::new(row.id),
            full_name: row.full_name,
            email,
            mobile: row.mobile,
            city: row.city,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SubscriberRow {
    id: Uuid,
    email: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<SubscriberRow> for NewsletterSubscriber {
    type Error = StoreError;

    fn try_from(row: SubscriberRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email)
            .map_err(|e| StoreError::DataCorruption(format!("invalid email in database: {e}")))?;

        Ok(Self {
            id: SubscriberId::new(row.id),
            email,
            created_at: row.created_at,
        })
    }
}

/// Turn a `DELETE` result into `NotFound` when nothing matched.
const fn ensure_deleted(rows_affected: u64) -> Result<(), StoreError> {
    if rows_affected == 0 {
        Err(StoreError::NotFound)
    } else {
        Ok(())
    }
}

// =============================================================================
// RecordStore
// =============================================================================

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r"
            SELECT id, name, description, image_url, created_at
            FROM projects
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn insert_project(
        &self,
        draft: &NewProject,
        image_url: Option<&str>,
    ) -> Result<Project, StoreError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r"
            INSERT INTO projects (name, description, image_url)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, image_url, created_at
            ",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from_insert)?;

        Ok(row.into())
    }

    async fn delete_project(&self, id: ProjectId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        ensure_deleted(result.rows_affected())
    }

    async fn list_clients(&self) -> Result<Vec<Client>, StoreError> {
        let rows = sqlx::query_as::<_, ClientRow>(
            r"
            SELECT id, name, designation, description, image_url, created_at
            FROM clients
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn insert_client(
        &self,
        draft: &NewClient,
        image_url: Option<&str>,
    ) -> Result<Client, StoreError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r"
            INSERT INTO clients (name, designation, description, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, designation, description, image_url, created_at
            ",
        )
        .bind(&draft.name)
        .bind(&draft.designation)
        .bind(&draft.description)
        .bind(image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from_insert)?;

        Ok(row.into())
    }

    async fn delete_client(&self, id: ClientId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        ensure_deleted(result.rows_affected())
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        let rows = sqlx::query_as::<_, ContactSubmissionRow>(
            r"
            SELECT id, full_name, email, mobile, city, created_at
            FROM contact_submissions
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ContactSubmission::try_from).collect()
    }

    async fn insert_contact_submission(
        &self,
        draft: &NewContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        let row = sqlx::query_as::<_, ContactSubmissionRow>(
            r"
            INSERT INTO contact_submissions (full_name, email, mobile, city)
            VALUES ($1, $2, $3, $4)
            RETURNING id, full_name, email, mobile, city, created_at
            ",
        )
        .bind(&draft.full_name)
        .bind(&draft.email)
        .bind(&draft.mobile)
        .bind(&draft.city)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from_insert)?;

        row.try_into()
    }

    async fn list_subscribers(&self) -> Result<Vec<NewsletterSubscriber>, StoreError> {
        let rows = sqlx::query_as::<_, SubscriberRow>(
            r"
            SELECT id, email, created_at
            FROM newsletter_subscribers
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(NewsletterSubscriber::try_from).collect()
    }

    async fn insert_subscriber(&self, email: &Email) -> Result<NewsletterSubscriber, StoreError> {
        let row = sqlx::query_as::<_, SubscriberRow>(
            r"
            INSERT INTO newsletter_subscribers (email)
            VALUES ($1)
            RETURNING id, email, created_at
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from_insert)?;

        row.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_deleted() {
        assert!(matches!(ensure_deleted(0), Err(StoreError::NotFound)));
        assert!(ensure_deleted(1).is_ok());
    }

    #[test]
    fn test_corrupt_email_row_is_rejected() {
        let row = SubscriberRow {
            id: Uuid::new_v4(),
            email: "not an email".to_string(),
            created_at: Utc::now(),
        };
        assert!(matches!(
            NewsletterSubscriber::try_from(row),
            Err(StoreError::DataCorruption(_))
        ));
    }
}
