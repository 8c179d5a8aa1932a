//! Contact submissions tab (read-only).

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, routing::get};
use tracing::instrument;

use realtrust_core::ContactSubmission;
use realtrust_data::leads::list_leads;

use crate::filters;
use crate::shell::{Shell, Tab};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/contacts", get(index))
}

#[derive(Template, WebTemplate)]
#[template(path = "contacts.html")]
pub struct ContactsPage {
    pub shell: Shell,
    pub submissions: Vec<ContactSubmission>,
}

/// Every hero and contact form submission, newest first.
///
/// GET /contacts
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> ContactsPage {
    ContactsPage {
        shell: Shell::new(Tab::Contacts, &state.config().site_url),
        submissions: list_leads(state.backend()).await,
    }
}
