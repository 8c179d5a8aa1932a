//! Portfolio projects shown on the landing page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::draft::{DraftError, required};
use crate::types::id::ProjectId;

/// A stored project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    /// Public URL of the uploaded cover image, if one was attached.
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated form input for a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
}

impl NewProject {
    /// Build a draft from raw form fields.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Missing`] when a field is blank.
    pub fn new(name: &str, description: &str) -> Result<Self, DraftError> {
        Ok(Self {
            name: required("name", name)?,
            description: required("description", description)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_trims_fields() {
        let draft = NewProject::new(" Lakeside Villa ", "Staging and listing\n").unwrap_or_else(
            |e| panic!("unexpected draft error: {e}"),
        );
        assert_eq!(draft.name, "Lakeside Villa");
        assert_eq!(draft.description, "Staging and listing");
    }

    #[test]
    fn test_new_project_requires_description() {
        assert_eq!(
            NewProject::new("Lakeside Villa", ""),
            Err(DraftError::Missing("description"))
        );
    }
}
