//! Newsletter subscribers tab (read-only).

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, routing::get};
use tracing::instrument;

use realtrust_core::NewsletterSubscriber;
use realtrust_data::newsletter::list_subscribers;

use crate::filters;
use crate::shell::{Shell, Tab};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/newsletter", get(index))
}

#[derive(Template, WebTemplate)]
#[template(path = "newsletter.html")]
pub struct NewsletterPage {
    pub shell: Shell,
    pub subscribers: Vec<NewsletterSubscriber>,
}

/// GET /newsletter
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> NewsletterPage {
    NewsletterPage {
        shell: Shell::new(Tab::Newsletter, &state.config().site_url),
        subscribers: list_subscribers(state.backend()).await,
    }
}
