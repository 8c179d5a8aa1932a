//! RealTrust Core - Shared types library.
//!
//! This crate provides common types used across all RealTrust components:
//! - `data` - Record and media stores plus the manager workflows
//! - `site` - Public landing page
//! - `admin` - Content administration panel
//! - `cli` - Command-line tools for migrations
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, emails, entities, drafts, media paths and notices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
