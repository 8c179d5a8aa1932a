//! In-memory stores for tests and local experiments.
//!
//! Behaviour mirrors the real backends where callers can observe it: lists
//! are newest first, subscriber emails are unique, deletes of unknown ids
//! fail with `NotFound` and media paths are never overwritten. Both stores can
//! be switched into a failing mode to exercise error paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use realtrust_core::{
    Client, ClientId, ContactSubmission, ContactSubmissionId, Email, MediaPath, NewClient,
    NewContactSubmission, NewProject, NewsletterSubscriber, Project, ProjectId, SubscriberId,
};

use crate::media::{MediaError, MediaStore};
use crate::store::{RecordStore, StoreError};

#[derive(Debug, Default)]
struct Tables {
    projects: Vec<Project>,
    clients: Vec<Client>,
    contact_submissions: Vec<ContactSubmission>,
    subscribers: Vec<NewsletterSubscriber>,
    last_created_at: Option<DateTime<Utc>>,
}

impl Tables {
    /// Strictly increasing timestamps, so insertion order is observable.
    fn next_created_at(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let next = match self.last_created_at {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_created_at = Some(next);
        next
    }
}

/// Newest first, ties broken by id descending.
fn newest_first<T: Clone, K: Ord>(rows: &[T], key: impl Fn(&T) -> (DateTime<Utc>, K)) -> Vec<T> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| key(b).cmp(&key(a)));
    sorted
}

/// Record store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    tables: Mutex<Tables>,
    unavailable: AtomicBool,
}

impl MemoryRecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store switched off".to_string()));
        }
        Ok(self.tables.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.tables().map(|_| ())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let tables = self.tables()?;
        Ok(newest_first(&tables.projects, |p| (p.created_at, p.id)))
    }

    async fn insert_project(
        &self,
        draft: &NewProject,
        image_url: Option<&str>,
    ) -> Result<Project, StoreError> {
        let mut tables = self.tables()?;
        let project = Project {
            id: ProjectId::random(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            image_url: image_url.map(str::to_string),
            created_at: tables.next_created_at(),
        };
        tables.projects.push(project.clone());
        Ok(project)
    }

    async fn delete_project(&self, id: ProjectId) -> Result<(), StoreError> {
        let mut tables = self.tables()?;
        let before = tables.projects.len();
        tables.projects.retain(|p| p.id != id);
        if tables.projects.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_clients(&self) -> Result<Vec<Client>, StoreError> {
        let tables = self.tables()?;
        Ok(newest_first(&tables.clients, |c| (c.created_at, c.id)))
    }

    async fn insert_client(
        &self,
        draft: &NewClient,
        image_url: Option<&str>,
    ) -> Result<Client, StoreError> {
        let mut tables = self.tables()?;
        let client = Client {
            id: ClientId::random(),
            name: draft.name.clone(),
            designation: draft.designation.clone(),
            description: draft.description.clone(),
            image_url: image_url.map(str::to_string),
            created_at: tables.next_created_at(),
        };
        tables.clients.push(client.clone());
        Ok(client)
    }

    async fn delete_client(&self, id: ClientId) -> Result<(), StoreError> {
        let mut tables = self.tables()?;
        let before = tables.clients.len();
        tables.clients.retain(|c| c.id != id);
        if tables.clients.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        let tables = self.tables()?;
        Ok(newest_first(&tables.contact_submissions, |s| {
            (s.created_at, s.id)
        }))
    }

    async fn insert_contact_submission(
        &self,
        draft: &NewContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        let mut tables = self.tables()?;
        let submission = ContactSubmission {
            id: ContactSubmissionId::random(),
            full_name: draft.full_name.clone(),
            email: draft.email.clone(),
            mobile: draft.mobile.clone(),
            city: draft.city.clone(),
            created_at: tables.next_created_at(),
        };
        tables.contact_submissions.push(submission.clone());
        Ok(submission)
    }

    async fn list_subscribers(&self) -> Result<Vec<NewsletterSubscriber>, StoreError> {
        let tables = self.tables()?;
        Ok(newest_first(&tables.subscribers, |s| (s.created_at, s.id)))
    }

    async fn insert_subscriber(&self, email: &Email) -> Result<NewsletterSubscriber, StoreError> {
        let mut tables = self.tables()?;
        if tables.subscribers.iter().any(|s| &s.email == email) {
            return Err(StoreError::UniqueViolation(
                "newsletter_subscribers_email_key".to_string(),
            ));
        }
        let subscriber = NewsletterSubscriber {
            id: SubscriberId::random(),
            email: email.clone(),
            created_at: tables.next_created_at(),
        };
        tables.subscribers.push(subscriber.clone());
        Ok(subscriber)
    }
}

/// Media store held entirely in memory.
#[derive(Debug)]
pub struct MemoryMediaStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    public_base: String,
    fail_uploads: AtomicBool,
}

impl Default for MemoryMediaStore {
    fn default() -> Self {
        Self::new("/media")
    }
}

impl MemoryMediaStore {
    #[must_use]
    pub fn new(public_base: &str) -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            public_base: public_base.trim_end_matches('/').to_string(),
            fail_uploads: AtomicBool::new(false),
        }
    }

    /// Make every subsequent upload fail.
    pub fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    /// Bytes stored at `path`, if any.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }

    /// Paths of every stored object, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .objects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        paths.sort();
        paths
    }
}

#[async_trait]
impl MediaStore for MemoryMediaStore {
    async fn upload(&self, path: &MediaPath, bytes: Vec<u8>) -> Result<(), MediaError> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(MediaError::Api {
                status: 503,
                message: "memory media store switched off".to_string(),
            });
        }

        let mut objects = self.objects.lock().unwrap_or_else(PoisonError::into_inner);
        if objects.contains_key(path.as_str()) {
            return Err(MediaError::AlreadyExists(path.to_string()));
        }
        objects.insert(path.to_string(), bytes);
        Ok(())
    }

    fn public_url(&self, path: &MediaPath) -> String {
        format!("{}/{}", self.public_base, path)
    }
}
