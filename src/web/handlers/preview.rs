//! Template gallery.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::state::AppState;
use crate::web::handlers::error::WebError;
use crate::web::params::WeddingParams;

/// One design in the gallery.
pub struct PreviewCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub details_href: String,
    /// Populated template for the thumbnail `srcdoc`; `None` if it failed to load.
    pub srcdoc: Option<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "preview.html")]
pub struct PreviewTemplate {
    pub bride_name: String,
    pub groom_name: String,
    pub form_href: String,
    pub cards: Vec<PreviewCard>,
}

/// Shows every template filled in with the couple's details.
///
/// # Endpoint
///
/// `GET /preview?brideName=...&groomName=...&weddingDateTime=...&venueName=...&venueAddress=...`
///
/// # Errors
///
/// Renders the "Missing Data" page with **400 Bad Request** when any field is
/// absent or blank.
pub async fn preview_handler(
    State(state): State<AppState>,
    Query(params): Query<WeddingParams>,
) -> Response {
    let query = params.query_string();

    let Some(data) = params.complete() else {
        return WebError::new(
            StatusCode::BAD_REQUEST,
            "Missing Data",
            "We couldn't find your wedding details. Please go back to the form and provide the required information.",
            "/form",
            "Go to Form",
        )
        .into_response();
    };

    let cards = state
        .invitation_service
        .preview(&data)
        .await
        .into_iter()
        .map(|preview| PreviewCard {
            details_href: format!("/details/{}?{}", preview.descriptor.id, query),
            id: preview.descriptor.id,
            name: preview.descriptor.name,
            description: preview.descriptor.description,
            srcdoc: preview.html,
        })
        .collect();

    PreviewTemplate {
        bride_name: data.bride_name,
        groom_name: data.groom_name,
        form_href: format!("/form?{}", query),
        cards,
    }
    .into_response()
}
