//! DTOs for decoding share tokens.

use serde::{Deserialize, Serialize};

use crate::domain::entities::InvitationShareRecord;

/// Query string of `GET /api/invitations` and `GET /invite`.
#[derive(Debug, Deserialize)]
pub struct InvitationQuery {
    pub data: Option<String>,
}

/// A decoded share token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationResponse {
    #[serde(flatten)]
    pub record: InvitationShareRecord,
    /// Whether `templateId` names a template of this deployment.
    pub template_available: bool,
}
