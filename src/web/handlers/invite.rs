//! Shared invitation page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::StatusCode,
};

use crate::api::dto::invitation::InvitationQuery;
use crate::application::services::ComposedInvitation;
use crate::domain::share_codec::{self, DecodeError};
use crate::state::AppState;
use crate::web::handlers::error::WebError;

/// Standalone page holding nothing but the invitation.
///
/// Used for shared links and for downloads.
#[derive(Template, WebTemplate)]
#[template(path = "invitation.html")]
pub struct InvitationDocument {
    pub title: String,
    pub invitation_html: String,
}

impl InvitationDocument {
    pub fn for_invitation(composed: &ComposedInvitation) -> Self {
        Self {
            title: format!(
                "{} & {} - Wedding Invitation",
                composed.request.data.bride_name, composed.request.data.groom_name
            ),
            invitation_html: composed.html.clone(),
        }
    }
}

fn invalid_link(reason: &DecodeError) -> WebError {
    let message = match reason {
        DecodeError::Malformed(detail) if detail == MISSING_DATA => "Missing data parameter",
        DecodeError::MissingField(_) => "Invalid invitation data",
        _ => "Could not decode invitation data",
    };
    tracing::debug!("Rejected share link: {}", reason);

    WebError::new(
        StatusCode::BAD_REQUEST,
        "Invalid or incomplete link",
        message,
        "/",
        "Create your own invitation",
    )
}

const MISSING_DATA: &str = "missing data parameter";

/// Opens an invitation from its share link.
///
/// # Endpoint
///
/// `GET /invite?data=<token>`
///
/// # Errors
///
/// - **400 Bad Request**: Missing, malformed or incomplete token; nothing of the
///   invitation is shown
/// - **404 / 503**: The template named by the link is unknown or unavailable
pub async fn invite_handler(
    State(state): State<AppState>,
    Query(query): Query<InvitationQuery>,
) -> Result<InvitationDocument, WebError> {
    let token = query
        .data
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| invalid_link(&DecodeError::Malformed(MISSING_DATA.to_string())))?;

    let record = share_codec::decode(&token).map_err(|e| invalid_link(&e))?;

    let composed = state
        .invitation_service
        .compose_record(record)
        .await
        .map_err(WebError::from)?;

    Ok(InvitationDocument::for_invitation(&composed))
}
