//! DTOs for the render endpoint.

use serde::Serialize;

use crate::application::services::ComposedInvitation;
use crate::domain::entities::QrMode;

/// A composed invitation and its metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub template_id: String,
    pub position: usize,
    pub total: usize,
    pub qr_code_type: QrMode,
    pub qr_payload: String,
    /// `filled`, `loading` or `missing`.
    pub qr_region: &'static str,
    pub share_url: String,
    pub file_name: String,
    pub html: String,
}

impl From<ComposedInvitation> for RenderResponse {
    fn from(composed: ComposedInvitation) -> Self {
        Self {
            file_name: composed.download_file_name(),
            template_id: composed.descriptor.id,
            position: composed.position,
            total: composed.total,
            qr_code_type: composed.request.mode,
            qr_payload: composed.share.qr_payload,
            qr_region: composed.qr_region.as_str(),
            share_url: composed.share.share_link,
            html: composed.html,
        }
    }
}
