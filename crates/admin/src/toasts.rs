//! Toast-only responses for HTMX requests that must not swap their target.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};

use realtrust_core::Notices;

/// HTMX response header overriding the swap style of the request.
pub const HX_RESWAP: &str = "hx-reswap";

/// Out-of-band toasts and nothing else.
#[derive(Template, WebTemplate)]
#[template(path = "partials/toasts.html")]
pub struct Toasts {
    pub notices: Notices,
}

/// Result of a create form submission.
///
/// `Failed` leaves the submitting form in place, selected file and preview
/// included, and only appends its toasts.
pub enum CreateOutcome<T> {
    Created(T),
    Failed(Notices),
}

impl<T: IntoResponse> IntoResponse for CreateOutcome<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Created(fragment) => fragment.into_response(),
            Self::Failed(notices) => {
                ([(HX_RESWAP, "none")], Toasts { notices }).into_response()
            }
        }
    }
}
