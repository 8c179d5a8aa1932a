//! Lead-capture form handlers.
//!
//! The hero and contact forms post the same fields and write the same table.
//! Each responds with its own form fragment: cleared after a stored
//! submission, with the visitor's input kept otherwise, plus an out-of-band
//! toast.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tracing::instrument;

use realtrust_core::{LeadSource, NewContactSubmission, Notices, Report};
use realtrust_data::leads::submit_lead;

use crate::state::AppState;

/// Lead form data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LeadForm {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
}

/// One lead form (hero or contact), with any notices as toasts.
#[derive(Debug, Template, WebTemplate)]
#[template(path = "partials/lead_form.html")]
pub struct LeadFormTemplate {
    pub source: LeadSource,
    pub values: LeadForm,
    pub notices: Notices,
}

impl LeadFormTemplate {
    /// A blank form.
    #[must_use]
    pub fn blank(source: LeadSource) -> Self {
        Self {
            source,
            values: LeadForm::default(),
            notices: Notices::new(),
        }
    }

    #[must_use]
    pub const fn is_hero(&self) -> bool {
        matches!(self.source, LeadSource::Hero)
    }
}

/// Hero "Get a Free Consultation" form.
///
/// POST /leads/hero
#[instrument(skip(state, form))]
pub async fn hero(State(state): State<AppState>, Form(form): Form<LeadForm>) -> LeadFormTemplate {
    capture(&state, LeadSource::Hero, form).await
}

/// "Get In Touch" contact form.
///
/// POST /leads/contact
#[instrument(skip(state, form))]
pub async fn contact(
    State(state): State<AppState>,
    Form(form): Form<LeadForm>,
) -> LeadFormTemplate {
    capture(&state, LeadSource::Contact, form).await
}

async fn capture(state: &AppState, source: LeadSource, form: LeadForm) -> LeadFormTemplate {
    let mut notices = Notices::new();

    let stored = match NewContactSubmission::new(&form.full_name, &form.email, &form.mobile, &form.city)
    {
        Ok(draft) => submit_lead(state.backend(), source, &draft, &mut notices)
            .await
            .is_ok(),
        Err(e) => {
            tracing::info!(source = source.as_str(), error = %e, "Rejected lead form");
            notices.report(source.failure_notice());
            false
        }
    };

    LeadFormTemplate {
        source,
        values: if stored { LeadForm::default() } else { form },
        notices,
    }
}
