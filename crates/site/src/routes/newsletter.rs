//! Newsletter subscription handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tracing::instrument;

use realtrust_core::{Email, Notice, Notices, Report};
use realtrust_data::SubscribeOutcome;
use realtrust_data::newsletter;

use crate::state::AppState;

/// Newsletter subscription form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubscribeForm {
    pub email: String,
}

/// The newsletter bar's form (replaces itself via HTMX).
#[derive(Debug, Template, WebTemplate)]
#[template(path = "partials/newsletter_form.html")]
pub struct NewsletterFormTemplate {
    pub email: String,
    pub notices: Notices,
}

impl NewsletterFormTemplate {
    /// A blank form.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            email: String::new(),
            notices: Notices::new(),
        }
    }
}

/// Subscribe to the newsletter (HTMX).
///
/// The input is cleared only after a new subscription; an address that is
/// already subscribed gets an informational toast and stays in the field.
///
/// POST /newsletter
#[instrument(skip(state, form))]
pub async fn subscribe(
    State(state): State<AppState>,
    Form(form): Form<SubscribeForm>,
) -> NewsletterFormTemplate {
    let mut notices = Notices::new();

    let clear = match Email::parse(&form.email) {
        Ok(email) => matches!(
            newsletter::subscribe(state.backend(), &email, &mut notices).await,
            Ok(SubscribeOutcome::Subscribed(_))
        ),
        Err(e) => {
            tracing::info!(error = %e, "Rejected newsletter email");
            notices.report(Notice::error("Error", "Please enter a valid email address."));
            false
        }
    };

    NewsletterFormTemplate {
        email: if clear { String::new() } else { form.email },
        notices,
    }
}
