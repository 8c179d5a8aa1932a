//! Clients (testimonials) manager.
//!
//! Same workflow as projects, with a designation field and a round avatar.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, Path, State},
    routing::{get, post},
};
use tracing::instrument;
use uuid::Uuid;

use realtrust_core::{Client, ClientId, NewClient, Notices, Report};
use realtrust_data::EntityManager;

use crate::filters;
use crate::routes::upload::{CreateForm, MAX_UPLOAD_BYTES};
use crate::shell::{Shell, Tab};
use crate::state::AppState;
use crate::toasts::CreateOutcome;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/clients",
            get(index)
                .post(create)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/clients/list", get(list))
        .route("/clients/{id}/delete", post(delete))
}

#[derive(Template, WebTemplate)]
#[template(path = "clients/index.html")]
pub struct ClientsPage {
    pub shell: Shell,
    pub form: ClientFormTemplate,
}

#[derive(Template, WebTemplate)]
#[template(path = "clients/form.html")]
pub struct ClientFormTemplate {
    pub notices: Notices,
    pub list: Option<ClientListTemplate>,
}

impl ClientFormTemplate {
    #[must_use]
    pub fn blank() -> Self {
        Self {
            notices: Notices::new(),
            list: None,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "clients/list.html")]
pub struct ClientListTemplate {
    pub clients: Vec<Client>,
    pub notices: Notices,
    pub oob: bool,
}

/// GET /clients
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> ClientsPage {
    ClientsPage {
        shell: Shell::new(Tab::Clients, &state.config().site_url),
        form: ClientFormTemplate::blank(),
    }
}

/// GET /clients/list
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> ClientListTemplate {
    ClientListTemplate {
        clients: EntityManager::<Client>::new(state.backend()).list().await,
        notices: Notices::new(),
        oob: false,
    }
}

/// POST /clients
#[instrument(skip(state, multipart))]
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> CreateOutcome<ClientFormTemplate> {
    let mut notices = Notices::new();
    let form = match CreateForm::read(multipart).await {
        Ok(form) => form,
        Err(_) => {
            notices.report(EntityManager::<Client>::create_failed());
            return CreateOutcome::Failed(notices);
        }
    };
    let manager = EntityManager::<Client>::new(state.backend());

    let draft = NewClient::new(
        &form.text("name"),
        &form.text("designation"),
        &form.text("description"),
    );
    let created = match draft {
        Ok(draft) => manager.create(&draft, form.image, &mut notices).await.ok(),
        Err(e) => {
            tracing::info!(error = %e, "Rejected client form");
            notices.report(EntityManager::<Client>::create_failed());
            None
        }
    };

    match created {
        Some(created) => CreateOutcome::Created(ClientFormTemplate {
            notices,
            list: Some(ClientListTemplate {
                clients: created.items,
                notices: Notices::new(),
                oob: true,
            }),
        }),
        None => CreateOutcome::Failed(notices),
    }
}

/// POST /clients/{id}/delete
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ClientListTemplate {
    let manager = EntityManager::<Client>::new(state.backend());
    let mut notices = Notices::new();

    let clients = match manager.delete(ClientId::new(id), &mut notices).await {
        Ok(clients) => clients,
        Err(_) => manager.list().await,
    };

    ClientListTemplate {
        clients,
        notices,
        oob: false,
    }
}
