//! Newsletter subscriptions.

use tracing::instrument;

use realtrust_core::{Email, NewsletterSubscriber, Notice, Report};

use crate::backend::Backend;
use crate::store::StoreError;

/// Result of a subscribe attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// A new subscriber row was stored.
    Subscribed(NewsletterSubscriber),
    /// The address was already on the list; nothing was stored.
    AlreadySubscribed,
}

/// Subscribe `email` and report the outcome.
///
/// A duplicate address is not an error: it is reported as an informational
/// notice and returned as [`SubscribeOutcome::AlreadySubscribed`].
///
/// # Errors
///
/// Returns any other store error after reporting a failure notice.
#[instrument(skip_all, fields(domain = email.domain()))]
pub async fn subscribe<R: Report + Send>(
    backend: &Backend,
    email: &Email,
    report: &mut R,
) -> Result<SubscribeOutcome, StoreError> {
    match backend.records().insert_subscriber(email).await {
        Ok(subscriber) => {
            tracing::info!(id = %subscriber.id, "Newsletter subscription stored");
            report.report(Notice::success(
                "Subscribed!",
                "You've been successfully subscribed to our newsletter.",
            ));
            Ok(SubscribeOutcome::Subscribed(subscriber))
        }
        Err(e) if e.is_unique_violation() => {
            tracing::info!("Email already subscribed");
            report.report(Notice::info(
                "Already Subscribed",
                "This email is already subscribed to our newsletter.",
            ));
            Ok(SubscribeOutcome::AlreadySubscribed)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store subscription");
            report.report(Notice::error(
                "Error",
                "Failed to subscribe. Please try again.",
            ));
            Err(e)
        }
    }
}

/// Every subscriber, newest first. A failed fetch is logged and yields
/// nothing.
pub async fn list_subscribers(backend: &Backend) -> Vec<NewsletterSubscriber> {
    backend
        .records()
        .list_subscribers()
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to fetch newsletter subscribers");
            Vec::new()
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use realtrust_core::{Notices, Severity};

    use super::*;

    #[tokio::test]
    async fn test_duplicate_subscription_is_informational() {
        let (backend, _, _) = Backend::in_memory();
        let mut notices = Notices::new();

        let first = subscribe(&backend, &Email::parse("a@b.com").unwrap(), &mut notices)
            .await
            .unwrap();
        assert!(matches!(first, SubscribeOutcome::Subscribed(_)));

        let second = subscribe(&backend, &Email::parse(" A@B.com").unwrap(), &mut notices)
            .await
            .unwrap();
        assert_eq!(second, SubscribeOutcome::AlreadySubscribed);

        assert_eq!(list_subscribers(&backend).await.len(), 1);
        assert!(!notices.has_errors());
        let last = notices.iter().next_back().unwrap();
        assert_eq!(last.severity, Severity::Info);
        assert_eq!(last.title, "Already Subscribed");
    }

    #[tokio::test]
    async fn test_store_failure_reports_error() {
        let (backend, records, _) = Backend::in_memory();
        records.set_unavailable(true);
        let mut notices = Notices::new();

        let result = subscribe(&backend, &Email::parse("a@b.com").unwrap(), &mut notices).await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
        assert_eq!(
            notices.iter().next().unwrap().message,
            "Failed to subscribe. Please try again."
        );
    }
}
