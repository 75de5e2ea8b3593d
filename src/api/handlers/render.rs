//! Handler for rendering invitations.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::render::RenderResponse;
use crate::api::dto::share::InvitationRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Composes the final invitation HTML.
///
/// # Endpoint
///
/// `POST /api/render`
///
/// # Request Body
///
/// Same as `POST /api/share`.
///
/// # Errors
///
/// - **400 Bad Request**: A field is blank
/// - **404 Not Found**: Unknown `templateId`
/// - **503 Service Unavailable**: The template file cannot be loaded
/// - **500 Internal Server Error**: The share-link QR code cannot be generated
pub async fn render_handler(
    State(state): State<AppState>,
    Json(payload): Json<InvitationRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    payload.validate()?;

    let composed = state.invitation_service.compose(payload.into()).await?;

    Ok(Json(composed.into()))
}
