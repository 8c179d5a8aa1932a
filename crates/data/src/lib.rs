//! RealTrust data access.
//!
//! Everything the site and admin panel persist goes through a [`Backend`]:
//! one record store (tables) and one media store (uploaded images),
//! constructed once at startup and handed to each service's state.
//!
//! # Tables
//!
//! - `projects` - Portfolio projects (admin-managed, shown on the landing page)
//! - `clients` - Client testimonials (admin-managed, shown on the landing page)
//! - `contact_submissions` - Leads from the hero and contact forms
//! - `newsletter_subscribers` - Newsletter sign-ups (`email` is unique)
//!
//! # Workflows
//!
//! - [`manager`] - list / create-with-image / delete for projects and clients
//! - [`leads`] - contact submissions
//! - [`newsletter`] - subscriptions, with duplicate emails reported as info
//!
//! Lists are read-through: every mutation is followed by a fresh fetch and
//! local copies are never patched.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/data/migrations/` and run via:
//! ```bash
//! cargo run -p realtrust-cli -- migrate
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod config;
pub mod leads;
pub mod manager;
pub mod media;
pub mod migrate;
pub mod newsletter;
pub mod postgres;
pub mod store;

#[cfg(any(test, feature = "memory"))]
pub mod memory;

pub use backend::{Backend, BackendError};
pub use config::{ConfigError, StorageConfig};
pub use manager::{Created, CreateError, EntityManager, ImageUpload, ManagedEntity};
pub use media::{FsMediaStore, HostedMediaStore, MediaError, MediaStore};
pub use newsletter::SubscribeOutcome;
pub use postgres::{PgRecordStore, create_pool};
pub use store::{RecordStore, StoreError};
