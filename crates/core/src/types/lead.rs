//! Contact submissions captured by the hero and contact forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::draft::{DraftError, required};
use crate::types::email::Email;
use crate::types::id::ContactSubmissionId;
use crate::types::notice::Notice;

/// A stored contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: ContactSubmissionId,
    pub full_name: String,
    pub email: Email,
    pub mobile: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
}

/// Validated lead-capture form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactSubmission {
    pub full_name: String,
    pub email: Email,
    pub mobile: String,
    pub city: String,
}

impl NewContactSubmission {
    /// Build a draft from raw form fields.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Missing`] for blank fields and
    /// [`DraftError::Email`] when the address does not parse.
    pub fn new(full_name: &str, email: &str, mobile: &str, city: &str) -> Result<Self, DraftError> {
        Ok(Self {
            full_name: required("full name", full_name)?,
            email: Email::parse(email)?,
            mobile: required("mobile", mobile)?,
            city: required("city", city)?,
        })
    }
}

/// Which landing-page form produced a lead.
///
/// Both forms write the same table; they differ only in what the visitor is
/// told afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    /// "Get a Free Consultation" form in the hero section.
    Hero,
    /// "Get In Touch" form near the bottom of the page.
    Contact,
}

impl LeadSource {
    /// Route segment and form identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Contact => "contact",
        }
    }

    /// Notice shown once the submission is stored.
    #[must_use]
    pub fn success_notice(self) -> Notice {
        match self {
            Self::Hero => Notice::success(
                "Success!",
                "Your consultation request has been submitted.",
            ),
            Self::Contact => Notice::success(
                "Message Sent!",
                "We'll get back to you as soon as possible.",
            ),
        }
    }

    /// Notice shown when the submission could not be stored.
    #[must_use]
    pub fn failure_notice(self) -> Notice {
        match self {
            Self::Hero => Notice::error("Error", "Failed to submit form. Please try again."),
            Self::Contact => Notice::error("Error", "Failed to send message. Please try again."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::notice::Severity;

    #[test]
    fn test_new_submission_normalizes_email() {
        let lead = NewContactSubmission::new("Jane Doe", " Jane@X.com ", "555-0100", "Austin")
            .unwrap_or_else(|e| panic!("unexpected draft error: {e}"));
        assert_eq!(lead.full_name, "Jane Doe");
        assert_eq!(lead.email.as_str(), "jane@x.com");
        assert_eq!(lead.mobile, "555-0100");
        assert_eq!(lead.city, "Austin");
    }

    #[test]
    fn test_new_submission_rejects_bad_email() {
        assert!(matches!(
            NewContactSubmission::new("Jane Doe", "jane", "555-0100", "Austin"),
            Err(DraftError::Email(_))
        ));
    }

    #[test]
    fn test_new_submission_requires_city() {
        assert_eq!(
            NewContactSubmission::new("Jane Doe", "jane@x.com", "555-0100", ""),
            Err(DraftError::Missing("city"))
        );
    }

    #[test]
    fn test_sources_have_distinct_notices() {
        assert_eq!(LeadSource::Hero.success_notice().title, "Success!");
        assert_eq!(LeadSource::Contact.success_notice().title, "Message Sent!");
        assert_eq!(
            LeadSource::Contact.failure_notice().severity,
            Severity::Error
        );
    }
}
