//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use realtrust_core::{Client, LeadSource, Project};
use realtrust_data::EntityManager;

use crate::filters;
use crate::routes::leads::LeadFormTemplate;
use crate::routes::newsletter::NewsletterFormTemplate;
use crate::sections::{ClientCard, ProjectCard, client_cards, project_cards};
use crate::state::AppState;

/// The full landing page: header, hero, about, projects, clients, contact,
/// newsletter and footer, always in that order.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub admin_url: String,
    pub projects: Vec<ProjectCard>,
    pub clients: Vec<ClientCard>,
    pub hero_form: LeadFormTemplate,
    pub contact_form: LeadFormTemplate,
    pub newsletter_form: NewsletterFormTemplate,
}

/// Landing page.
///
/// GET /
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> IndexTemplate {
    let projects = EntityManager::<Project>::new(state.backend()).list().await;
    let clients = EntityManager::<Client>::new(state.backend()).list().await;

    IndexTemplate {
        admin_url: state.config().admin_url.clone(),
        projects: project_cards(projects),
        clients: client_cards(clients),
        hero_form: LeadFormTemplate::blank(LeadSource::Hero),
        contact_form: LeadFormTemplate::blank(LeadSource::Contact),
        newsletter_form: NewsletterFormTemplate::blank(),
    }
}
