//! Core types for RealTrust.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod client;
pub mod draft;
pub mod email;
pub mod id;
pub mod lead;
pub mod media;
pub mod notice;
pub mod project;
pub mod subscriber;

pub use client::{Client, NewClient};
pub use draft::DraftError;
pub use email::{Email, EmailError};
pub use id::*;
pub use lead::{ContactSubmission, LeadSource, NewContactSubmission};
pub use media::{MediaKind, MediaPath};
pub use notice::{Notice, Notices, Report, Severity};
pub use project::{NewProject, Project};
pub use subscriber::NewsletterSubscriber;
