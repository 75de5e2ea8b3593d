#![allow(dead_code)]

use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use wedding_invite::application::services::InvitationService;
use wedding_invite::domain::catalog::TemplateCatalog;
use wedding_invite::domain::repositories::TemplateSource;
use wedding_invite::infrastructure::qr::PngQrRenderer;
use wedding_invite::infrastructure::templates::{FsTemplateSource, StaticTemplateSource};
use wedding_invite::state::AppState;

pub const ORIGIN: &str = "https://invites.example.com";

/// Minimal design with every slot and a QR element.
pub fn test_template(file_number: usize) -> String {
    let date_slot = if file_number == 6 {
        "{{formattedDate}}"
    } else {
        "{{dateTime}}"
    };

    format!(
        r#"<html><body><h1>{{{{brideName}}}} &amp; {{{{groomName}}}}</h1><p class="date">{}</p><p class="venue">{{{{venueName}}}}</p><a href="{{{{venueUrl}}}}">map</a><div id="qrcode"></div><footer>template {}</footer></body></html>"#,
        date_slot, file_number
    )
}

pub fn test_template_source() -> StaticTemplateSource {
    (1..=6).fold(StaticTemplateSource::new(), |source, n| {
        source.with_template(n, test_template(n))
    })
}

pub fn create_state_with(templates: Arc<dyn TemplateSource>) -> AppState {
    AppState::new(InvitationService::new(
        Arc::new(TemplateCatalog::builtin()),
        templates,
        Arc::new(PngQrRenderer::default()),
        ORIGIN,
    ))
}

pub fn create_test_state() -> AppState {
    create_state_with(Arc::new(test_template_source()))
}

/// State backed by the template files shipped in `static/templates`.
pub fn create_shipped_state() -> AppState {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static/templates");
    create_state_with(Arc::new(FsTemplateSource::new(dir)))
}

pub fn sample_request(template_id: &str, qr_code_type: &str) -> Value {
    json!({
        "brideName": "Sarah Johnson",
        "groomName": "Michael Smith",
        "weddingDateTime": "2024-09-21T16:00",
        "venueName": "Grand Plaza Hotel",
        "venueAddress": "https://maps.app.goo.gl/example123",
        "templateId": template_id,
        "qrCodeType": qr_code_type
    })
}

/// The sample couple as page query parameters.
pub const SAMPLE_QUERY: &str = "brideName=Sarah+Johnson&groomName=Michael+Smith&weddingDateTime=2024-09-21T16%3A00&venueName=Grand+Plaza+Hotel&venueAddress=https%3A%2F%2Fmaps.app.goo.gl%2Fexample123";
