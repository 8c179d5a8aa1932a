//! Projects manager: create form, lazily loaded list and delete.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, Path, State},
    routing::{get, post},
};
use tracing::instrument;
use uuid::Uuid;

use realtrust_core::{NewProject, Notices, Project, ProjectId, Report};
use realtrust_data::EntityManager;

use crate::filters;
use crate::routes::upload::{CreateForm, MAX_UPLOAD_BYTES};
use crate::shell::{Shell, Tab};
use crate::state::AppState;
use crate::toasts::CreateOutcome;

/// Build the projects router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(index)
                .post(create)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/projects/list", get(list))
        .route("/projects/{id}/delete", post(delete))
}

/// Projects tab.
#[derive(Template, WebTemplate)]
#[template(path = "projects/index.html")]
pub struct ProjectsPage {
    pub shell: Shell,
    pub form: ProjectFormTemplate,
}

/// The blank create form, optionally followed by an out-of-band list refresh.
#[derive(Template, WebTemplate)]
#[template(path = "projects/form.html")]
pub struct ProjectFormTemplate {
    pub notices: Notices,
    pub list: Option<ProjectListTemplate>,
}

impl ProjectFormTemplate {
    #[must_use]
    pub fn blank() -> Self {
        Self {
            notices: Notices::new(),
            list: None,
        }
    }
}

/// The "All Projects" list.
#[derive(Template, WebTemplate)]
#[template(path = "projects/list.html")]
pub struct ProjectListTemplate {
    pub projects: Vec<Project>,
    pub notices: Notices,
    /// Rendered as an out-of-band swap next to the form.
    pub oob: bool,
}

/// GET /projects
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> ProjectsPage {
    ProjectsPage {
        shell: Shell::new(Tab::Projects, &state.config().site_url),
        form: ProjectFormTemplate::blank(),
    }
}

/// List fragment, loaded by the tab once it is on screen.
///
/// GET /projects/list
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> ProjectListTemplate {
    ProjectListTemplate {
        projects: EntityManager::<Project>::new(state.backend()).list().await,
        notices: Notices::new(),
        oob: false,
    }
}

/// Create a project (multipart: `name`, `description`, optional `image`).
///
/// On success the blank form comes back with the refreshed list swapped in
/// out of band. On failure only the toast comes back and the form, chosen
/// image included, stays as it was.
///
/// POST /projects
#[instrument(skip(state, multipart))]
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> CreateOutcome<ProjectFormTemplate> {
    let mut notices = Notices::new();
    let form = match CreateForm::read(multipart).await {
        Ok(form) => form,
        Err(_) => {
            notices.report(EntityManager::<Project>::create_failed());
            return CreateOutcome::Failed(notices);
        }
    };
    let manager = EntityManager::<Project>::new(state.backend());

    let created = match NewProject::new(&form.text("name"), &form.text("description")) {
        Ok(draft) => manager.create(&draft, form.image, &mut notices).await.ok(),
        Err(e) => {
            tracing::info!(error = %e, "Rejected project form");
            notices.report(EntityManager::<Project>::create_failed());
            None
        }
    };

    match created {
        Some(created) => CreateOutcome::Created(ProjectFormTemplate {
            notices,
            list: Some(ProjectListTemplate {
                projects: created.items,
                notices: Notices::new(),
                oob: true,
            }),
        }),
        None => CreateOutcome::Failed(notices),
    }
}

/// Delete a project and return the refreshed list.
///
/// POST /projects/{id}/delete
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> ProjectListTemplate {
    let manager = EntityManager::<Project>::new(state.backend());
    let mut notices = Notices::new();

    let projects = match manager.delete(ProjectId::new(id), &mut notices).await {
        Ok(projects) => projects,
        Err(_) => manager.list().await,
    };

    ProjectListTemplate {
        projects,
        notices,
        oob: false,
    }
}
