//! Single-template view with navigation, QR mode toggle and download.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::json;

use crate::application::services::{ComposeRequest, ComposedInvitation};
use crate::domain::entities::QrMode;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::error::WebError;
use crate::web::handlers::invite::InvitationDocument;
use crate::web::params::WeddingParams;

#[derive(Template, WebTemplate)]
#[template(path = "details.html")]
pub struct DetailsTemplate {
    pub name: String,
    pub description: String,
    pub position: usize,
    pub total: usize,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
    pub templates_href: String,
    pub edit_href: String,
    pub download_href: String,
    pub toggle_href: String,
    pub toggle_label: &'static str,
    pub qr_hint: &'static str,
    pub share_link: String,
    pub invitation_html: String,
}

impl DetailsTemplate {
    fn new(composed: ComposedInvitation, query: &str) -> Self {
        let mode = composed.request.mode;
        let link = |id: &str, mode: QrMode| {
            format!("/details/{}?{}&qr={}", id, query, mode.as_str())
        };

        let (toggle_label, qr_hint) = match mode {
            QrMode::Venue => (
                "QR: Venue Location",
                "The QR code links to your venue location.",
            ),
            QrMode::Invitation => (
                "QR: Digital Invitation",
                "The QR code opens the digital invitation.",
            ),
        };

        Self {
            previous_href: composed.previous_id.as_deref().map(|id| link(id, mode)),
            next_href: composed.next_id.as_deref().map(|id| link(id, mode)),
            templates_href: format!("/preview?{}", query),
            edit_href: format!("/form?{}", query),
            download_href: format!(
                "/details/{}/download?{}&qr={}",
                composed.descriptor.id,
                query,
                mode.as_str()
            ),
            toggle_href: link(&composed.descriptor.id, mode.toggled()),
            toggle_label,
            qr_hint,
            name: composed.descriptor.name,
            description: composed.descriptor.description,
            position: composed.position,
            total: composed.total,
            share_link: composed.share.share_link,
            invitation_html: composed.html,
        }
    }
}

/// Composes the request or explains why not, keeping the form data in the
/// "Return to Templates" link.
async fn compose_for_page(
    state: &AppState,
    template_id: String,
    params: &WeddingParams,
) -> Result<ComposedInvitation, WebError> {
    let templates_href = format!("/preview?{}", params.query_string());

    let Some(data) = params.complete() else {
        return Err(WebError::new(
            StatusCode::BAD_REQUEST,
            "Template Not Available",
            "We couldn't find the template or your wedding details are missing.",
            templates_href,
            "Return to Templates",
        ));
    };

    state
        .invitation_service
        .compose(ComposeRequest::new(data, template_id, params.qr_mode()))
        .await
        .map_err(|e| WebError::from(e).with_back(templates_href, "Return to Templates"))
}

/// Shows one template filled in with the couple's details.
///
/// # Endpoint
///
/// `GET /details/{template_id}?<wedding data>&qr=venue|invitation`
///
/// # Page
///
/// - Previous / next navigation and "Template N of M"
/// - Download, Templates and Edit actions
/// - QR mode toggle and the share link of the invitation
///
/// # Errors
///
/// - **400** "Template Not Available" when wedding data is missing
/// - **404** "Template Not Available" for an unknown template id
/// - **503** when the template file cannot be loaded
pub async fn details_handler(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
    Query(params): Query<WeddingParams>,
) -> Result<impl IntoResponse, WebError> {
    let composed = compose_for_page(&state, template_id, &params).await?;

    Ok(DetailsTemplate::new(composed, &params.query_string()))
}

/// Downloads the finished invitation as a standalone HTML page.
///
/// # Endpoint
///
/// `GET /details/{template_id}/download?<wedding data>&qr=venue|invitation`
///
/// The file is only produced once the QR region is final; it is served as an
/// attachment named `<bride>-<groom>-wedding-invitation.html`.
pub async fn download_handler(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
    Query(params): Query<WeddingParams>,
) -> Result<Response, WebError> {
    let composed = compose_for_page(&state, template_id, &params).await?;

    if !composed.is_settled() {
        return Err(AppError::template_unavailable(
            "The QR code is still being generated, please try again",
            json!({ "template_id": composed.descriptor.id }),
        )
        .into());
    }

    let file_name = composed.download_file_name();
    let document = InvitationDocument::for_invitation(&composed);

    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&content_disposition(&file_name)) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }

    Ok((headers, document).into_response())
}

/// `attachment` disposition with an ASCII fallback and the UTF-8 name.
fn content_disposition(file_name: &str) -> String {
    let ascii: String = file_name
        .chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' { c } else { '_' })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii,
        utf8_percent_encode(file_name, NON_ALPHANUMERIC)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_ascii() {
        assert_eq!(
            content_disposition("Sarah-Michael-wedding-invitation.html"),
            "attachment; filename=\"Sarah-Michael-wedding-invitation.html\"; filename*=UTF-8''Sarah%2DMichael%2Dwedding%2Dinvitation%2Ehtml"
        );
    }

    #[test]
    fn test_content_disposition_non_ascii() {
        let value = content_disposition("Zoë-Jürgen-wedding-invitation.html");

        assert!(value.starts_with("attachment; filename=\"Zo_-J_rgen-wedding-invitation.html\""));
        assert!(value.contains("Zo%C3%AB"));
        assert!(HeaderValue::from_str(&value).is_ok());
    }
}
