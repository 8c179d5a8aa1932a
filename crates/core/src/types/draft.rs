//! Validation shared by the form drafts.

use crate::types::email::EmailError;

/// A form draft failed its required-field checks.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// A required field was empty after trimming.
    #[error("{0} is required")]
    Missing(&'static str),
    /// The email field did not parse.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),
}

/// Trim a required text field, rejecting blank input.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DraftError::Missing(field));
    }
    Ok(trimmed.to_owned())
}
