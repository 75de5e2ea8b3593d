//! DTOs for the share-link endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::{ComposeRequest, ShareOutcome};
use crate::domain::entities::{QrMode, WeddingData};

/// Wedding details plus the chosen design and QR mode.
///
/// Shared by `POST /api/share` and `POST /api/render`.
///
/// ```json
/// {
///   "brideName": "Sarah Johnson",
///   "groomName": "Michael Smith",
///   "weddingDateTime": "2024-09-21T16:00",
///   "venueName": "Grand Plaza Hotel",
///   "venueAddress": "https://maps.app.goo.gl/example123",
///   "templateId": "elegant-floral",
///   "qrCodeType": "invitation"
/// }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InvitationRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub wedding: WeddingData,

    #[validate(length(min = 1, message = "This field is required"))]
    pub template_id: String,

    #[serde(default)]
    pub qr_code_type: QrMode,
}

impl From<InvitationRequest> for ComposeRequest {
    fn from(request: InvitationRequest) -> Self {
        ComposeRequest::new(request.wedding, request.template_id, request.qr_code_type)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub token: String,
    pub share_url: String,
    pub qr_payload: String,
    pub qr_code_type: QrMode,
}

impl ShareResponse {
    pub fn new(outcome: ShareOutcome, mode: QrMode) -> Self {
        Self {
            token: outcome.token,
            share_url: outcome.share_link,
            qr_payload: outcome.qr_payload,
            qr_code_type: mode,
        }
    }
}
