//! Handler for the share-link endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::share::{InvitationRequest, ShareResponse};
use crate::application::services::ComposeRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the share link of an invitation.
///
/// # Endpoint
///
/// `POST /api/share`
///
/// # Request Body
///
/// See [`InvitationRequest`]. `qrCodeType` defaults to `venue`.
///
/// # Response
///
/// ```json
/// {
///   "token": "eyJicmlkZU5hbWUiOi...",
///   "shareUrl": "https://invites.example.com/invite?data=eyJicmlkZU5hbWUiOi...",
///   "qrPayload": "https://maps.app.goo.gl/example123",
///   "qrCodeType": "venue"
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: A field is blank
/// - **404 Not Found**: Unknown `templateId`
pub async fn share_handler(
    State(state): State<AppState>,
    Json(payload): Json<InvitationRequest>,
) -> Result<Json<ShareResponse>, AppError> {
    payload.validate()?;

    let request: ComposeRequest = payload.into();
    let outcome = state.invitation_service.share(&request)?;

    tracing::debug!(template = %request.template_id, mode = %request.mode, "Share link created");

    Ok(Json(ShareResponse::new(outcome, request.mode)))
}
