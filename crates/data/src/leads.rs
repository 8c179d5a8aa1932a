//! Lead capture from the hero and contact forms.

use tracing::instrument;

use realtrust_core::{ContactSubmission, LeadSource, NewContactSubmission, Report};

use crate::backend::Backend;
use crate::store::StoreError;

/// Store one contact submission and report the outcome.
///
/// # Errors
///
/// Returns the store error after reporting the form's failure notice.
#[instrument(skip_all, fields(source = source.as_str()))]
pub async fn submit_lead<R: Report + Send>(
    backend: &Backend,
    source: LeadSource,
    draft: &NewContactSubmission,
    report: &mut R,
) -> Result<ContactSubmission, StoreError> {
    match backend.records().insert_contact_submission(draft).await {
        Ok(submission) => {
            tracing::info!(id = %submission.id, "Lead captured");
            report.report(source.success_notice());
            Ok(submission)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store lead");
            report.report(source.failure_notice());
            Err(e)
        }
    }
}

/// Every contact submission, newest first. A failed fetch is logged and
/// yields nothing.
pub async fn list_leads(backend: &Backend) -> Vec<ContactSubmission> {
    backend
        .records()
        .list_contact_submissions()
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to fetch contact submissions");
            Vec::new()
        })
}
