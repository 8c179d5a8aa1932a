//! Client testimonials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::draft::{DraftError, required};
use crate::types::id::ClientId;

/// A stored client testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    /// Role and company, e.g. "CEO, Prime Estates".
    pub designation: String,
    /// The testimonial text.
    pub description: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated form input for a new client testimonial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub designation: String,
    pub description: String,
}

impl NewClient {
    /// Build a draft from raw form fields.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Missing`] when a field is blank.
    pub fn new(name: &str, designation: &str, description: &str) -> Result<Self, DraftError> {
        Ok(Self {
            name: required("name", name)?,
            designation: required("designation", designation)?,
            description: required("description", description)?,
        })
    }
}
