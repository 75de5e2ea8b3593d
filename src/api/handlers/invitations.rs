//! Handler for decoding share tokens.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::invitation::{InvitationQuery, InvitationResponse};
use crate::domain::share_codec::{self, DecodeError};
use crate::error::AppError;
use crate::state::AppState;

/// Decodes a share token back into its invitation record.
///
/// # Endpoint
///
/// `GET /api/invitations?data=<token>`
///
/// # Errors
///
/// - **400 Bad Request** (`invalid_link`): The token is missing, malformed or
///   incomplete
pub async fn invitation_handler(
    State(state): State<AppState>,
    Query(query): Query<InvitationQuery>,
) -> Result<Json<InvitationResponse>, AppError> {
    let token = query
        .data
        .ok_or_else(|| DecodeError::Malformed("missing data parameter".to_string()))?;

    let record = share_codec::decode(&token)?;
    let template_available = state.catalog().get(&record.template_id).is_some();

    Ok(Json(InvitationResponse {
        record,
        template_available,
    }))
}
