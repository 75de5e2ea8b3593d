//! Invitation composition service.

use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::domain::catalog::TemplateCatalog;
use crate::domain::entities::{InvitationShareRecord, QrMode, TemplateDescriptor, WeddingData};
use crate::domain::placeholders::populate;
use crate::domain::qr::{QrArtifact, QrError, QrRenderer, select_payload};
use crate::domain::renderer::{self, QrRegion, RenderOptions};
use crate::domain::repositories::TemplateSource;
use crate::domain::share_codec;
use crate::error::AppError;

/// Inputs of a single compose run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeRequest {
    pub data: WeddingData,
    pub template_id: String,
    pub mode: QrMode,
}

impl ComposeRequest {
    pub fn new(data: WeddingData, template_id: impl Into<String>, mode: QrMode) -> Self {
        Self {
            data,
            template_id: template_id.into(),
            mode,
        }
    }
}

impl From<InvitationShareRecord> for ComposeRequest {
    fn from(record: InvitationShareRecord) -> Self {
        Self {
            data: record.wedding_data(),
            template_id: record.template_id,
            mode: record.qr_code_type,
        }
    }
}

/// Share link of an invitation and what its QR code points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareOutcome {
    pub token: String,
    pub share_link: String,
    pub qr_payload: String,
}

/// A fully rendered invitation.
#[derive(Debug, Clone)]
pub struct ComposedInvitation {
    pub request: ComposeRequest,
    pub descriptor: TemplateDescriptor,
    /// 1-based catalog position.
    pub position: usize,
    pub total: usize,
    pub previous_id: Option<String>,
    pub next_id: Option<String>,
    pub html: String,
    pub share: ShareOutcome,
    pub qr: Option<QrArtifact>,
    pub qr_region: QrRegion,
}

impl ComposedInvitation {
    /// True when the page holds no loading placeholder and may be exported.
    pub fn is_settled(&self) -> bool {
        self.qr_region != QrRegion::Loading
    }

    /// Attachment name for the exported page.
    pub fn download_file_name(&self) -> String {
        let slug = |name: &str| {
            name.split_whitespace()
                .collect::<Vec<_>>()
                .join("-")
                .replace(['/', '\\', '"'], "")
        };
        format!(
            "{}-{}-wedding-invitation.html",
            slug(&self.request.data.bride_name),
            slug(&self.request.data.groom_name)
        )
    }
}

/// Populated (QR-less) rendering of one catalog template, for the gallery.
#[derive(Debug, Clone)]
pub struct TemplatePreview {
    pub descriptor: TemplateDescriptor,
    /// `None` when the template could not be loaded or populated.
    pub html: Option<String>,
}

/// Service running the invitation pipeline.
///
/// Coordinates the catalog, the template source, placeholder substitution,
/// share-link encoding, QR rendering and QR region splicing. QR rendering is
/// CPU-bound and runs on the blocking pool.
#[derive(Clone)]
pub struct InvitationService {
    catalog: Arc<TemplateCatalog>,
    templates: Arc<dyn TemplateSource>,
    qr_renderer: Arc<dyn QrRenderer>,
    public_origin: String,
}

impl InvitationService {
    /// Creates a new invitation service.
    ///
    /// `public_origin` is the scheme and host share links point at.
    pub fn new(
        catalog: Arc<TemplateCatalog>,
        templates: Arc<dyn TemplateSource>,
        qr_renderer: Arc<dyn QrRenderer>,
        public_origin: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            templates,
            qr_renderer,
            public_origin: public_origin.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn public_origin(&self) -> &str {
        &self.public_origin
    }

    /// Checks that the template source can serve files.
    pub async fn health_check(&self) -> bool {
        self.templates.health_check().await
    }

    /// Builds the share link and QR payload without rendering anything.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for blank fields and
    /// [`AppError::NotFound`] for an unknown template id.
    pub fn share(&self, request: &ComposeRequest) -> Result<ShareOutcome, AppError> {
        request.data.validate()?;
        self.descriptor(&request.template_id)?;

        Ok(self.share_outcome(request))
    }

    /// Loads a template and fills in the wedding data.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown template id,
    /// [`AppError::TemplateUnavailable`] when the file cannot be loaded and
    /// [`AppError::Validation`] when a field is blank.
    pub async fn populate_template(
        &self,
        data: &WeddingData,
        template_id: &str,
    ) -> Result<String, AppError> {
        let position = self
            .catalog
            .entry(template_id)
            .ok_or_else(|| template_not_found(template_id))?
            .position;

        let html = self.templates.fetch(position).await?;
        Ok(populate(&html, data)?)
    }

    /// Populates every catalog template for the gallery.
    ///
    /// A template that fails to load is shown without a preview rather than
    /// failing the whole page.
    pub async fn preview(&self, data: &WeddingData) -> Vec<TemplatePreview> {
        let mut previews = Vec::with_capacity(self.catalog.len());

        for descriptor in self.catalog.all() {
            let html = match self.populate_template(data, &descriptor.id).await {
                Ok(html) => Some(html),
                Err(e) => {
                    tracing::warn!(template = %descriptor.id, "Preview unavailable: {}", e);
                    None
                }
            };
            previews.push(TemplatePreview {
                descriptor: descriptor.clone(),
                html,
            });
        }

        previews
    }

    /// Runs the full pipeline for one invitation, for printing or download.
    ///
    /// The QR region always holds an image: the venue link in venue mode, the
    /// share link in invitation mode. In venue mode a QR failure degrades to
    /// the plain call-to-action; in invitation mode it is an error, since the
    /// QR code is the content.
    ///
    /// # Errors
    ///
    /// See [`Self::populate_template`]; additionally [`AppError::Internal`] when
    /// the share-link QR code cannot be generated.
    pub async fn compose(&self, request: ComposeRequest) -> Result<ComposedInvitation, AppError> {
        self.compose_with(request, true).await
    }

    /// Decodes a share token and composes the invitation it describes.
    ///
    /// Shared invitations are viewed on screen, so venue mode shows only the
    /// call-to-action link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidLink`] when the token does not decode, plus
    /// everything [`Self::compose`] returns.
    pub async fn compose_shared(&self, token: &str) -> Result<ComposedInvitation, AppError> {
        let record = share_codec::decode(token)?;
        self.compose_record(record).await
    }

    /// Composes an already decoded share record for on-screen viewing.
    ///
    /// # Errors
    ///
    /// See [`Self::compose`].
    pub async fn compose_record(
        &self,
        record: InvitationShareRecord,
    ) -> Result<ComposedInvitation, AppError> {
        self.compose_with(record.into(), false).await
    }

    async fn compose_with(
        &self,
        request: ComposeRequest,
        venue_qr: bool,
    ) -> Result<ComposedInvitation, AppError> {
        request.data.validate()?;

        let entry = self
            .catalog
            .entry(&request.template_id)
            .ok_or_else(|| template_not_found(&request.template_id))?;
        let descriptor = entry.descriptor.clone();
        let position = entry.position;
        let previous_id = entry.previous.map(|t| t.id.clone());
        let next_id = entry.next.map(|t| t.id.clone());

        let template_html = self.templates.fetch(position).await?;
        let populated = populate(&template_html, &request.data)?;

        let share = self.share_outcome(&request);

        let qr = if request.mode == QrMode::Venue && !venue_qr {
            None
        } else {
            match self.render_qr(&share.qr_payload).await {
                Ok(artifact) => Some(artifact),
                Err(e) if request.mode == QrMode::Venue => {
                    tracing::warn!("Venue QR code unavailable, showing link only: {}", e);
                    None
                }
                Err(e) => return Err(e),
            }
        };

        let venue_link = request.data.venue_link();
        let rendered = renderer::render(
            &populated,
            qr.as_ref(),
            request.mode,
            RenderOptions {
                venue_url: &venue_link,
                image_style: descriptor.qr_image_style(),
            },
        );

        tracing::debug!(
            template = %descriptor.id,
            mode = %request.mode,
            region = ?rendered.qr_region,
            "Invitation composed"
        );

        Ok(ComposedInvitation {
            request,
            descriptor,
            position,
            total: self.catalog.len(),
            previous_id,
            next_id,
            html: rendered.html,
            share,
            qr,
            qr_region: rendered.qr_region,
        })
    }

    /// Renders a QR code of `payload` on the blocking pool.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the payload cannot be encoded or the
    /// rendering task panics.
    pub async fn render_qr(&self, payload: &str) -> Result<QrArtifact, AppError> {
        self.spawn_render(payload).await?.map_err(AppError::from)
    }

    /// Renders a QR code of a caller-supplied payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the payload does not fit in a QR
    /// code, and [`AppError::Internal`] if the image cannot be produced.
    pub async fn render_payload_qr(&self, payload: &str) -> Result<QrArtifact, AppError> {
        self.spawn_render(payload).await?.map_err(|e| match e {
            QrError::Encoding(reason) => AppError::bad_request(
                "Payload does not fit in a QR code",
                json!({ "reason": reason }),
            ),
            other => AppError::from(other),
        })
    }

    async fn spawn_render(&self, payload: &str) -> Result<Result<QrArtifact, QrError>, AppError> {
        let renderer = Arc::clone(&self.qr_renderer);
        let payload = payload.to_string();

        tokio::task::spawn_blocking(move || renderer.render(&payload))
            .await
            .map_err(|e| {
                AppError::internal("QR rendering task failed", json!({ "reason": e.to_string() }))
            })
    }

    fn descriptor(&self, template_id: &str) -> Result<&TemplateDescriptor, AppError> {
        self.catalog
            .get(template_id)
            .ok_or_else(|| template_not_found(template_id))
    }

    fn share_outcome(&self, request: &ComposeRequest) -> ShareOutcome {
        let record =
            InvitationShareRecord::from_wedding(&request.data, &request.template_id, request.mode);
        let token = share_codec::encode(&record);
        let share_link = share_codec::share_link(&self.public_origin, &token);
        let venue_link = request.data.venue_link();
        let qr_payload = select_payload(request.mode, &venue_link, &share_link).to_string();

        ShareOutcome {
            token,
            share_link,
            qr_payload,
        }
    }
}

fn template_not_found(template_id: &str) -> AppError {
    AppError::not_found(
        "Template Not Available",
        json!({ "template_id": template_id }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockTemplateSource, TemplateLoadError};

    const TEMPLATE: &str = r#"<h1>{{brideName}} &amp; {{groomName}}</h1><p>{{dateTime}}</p><p>{{venueName}}</p><div id="qrcode"></div>"#;

    struct FakeQr;

    impl QrRenderer for FakeQr {
        fn render(&self, payload: &str) -> Result<QrArtifact, QrError> {
            if payload.len() > 200 {
                return Err(QrError::Encoding("too long".to_string()));
            }
            Ok(QrArtifact::new(payload, "image/png", payload.as_bytes().to_vec()))
        }
    }

    fn service(source: MockTemplateSource) -> InvitationService {
        InvitationService::new(
            Arc::new(TemplateCatalog::builtin()),
            Arc::new(source),
            Arc::new(FakeQr),
            "https://invites.example/",
        )
    }

    fn template_source() -> MockTemplateSource {
        let mut source = MockTemplateSource::new();
        source
            .expect_fetch()
            .returning(|_| Ok(TEMPLATE.to_string()));
        source
    }

    #[tokio::test]
    async fn test_compose_venue_mode() {
        let mut source = MockTemplateSource::new();
        source
            .expect_fetch()
            .withf(|n| *n == 1)
            .times(1)
            .returning(|_| Ok(TEMPLATE.to_string()));

        let composed = service(source)
            .compose(ComposeRequest::new(
                WeddingData::sample(),
                "elegant-floral",
                QrMode::Venue,
            ))
            .await
            .unwrap();

        assert_eq!(composed.position, 1);
        assert_eq!(composed.total, 6);
        assert_eq!(composed.previous_id, None);
        assert_eq!(composed.next_id.as_deref(), Some("rustic-charm"));
        assert!(composed.html.contains("Sarah Johnson"));
        assert!(composed.html.contains("Saturday, September 21, 2024, 4:00 PM"));
        assert!(composed.html.contains("View on Google Maps"));
        assert!(!composed.html.contains("{{"));
        assert_eq!(composed.share.qr_payload, "https://maps.app.goo.gl/example123");
        assert!(composed
            .share
            .share_link
            .starts_with("https://invites.example/invite?data="));
        assert!(composed.is_settled());
    }

    #[tokio::test]
    async fn test_switching_mode_changes_payload_and_artifact() {
        let service = service(template_source());
        let venue = service
            .compose(ComposeRequest::new(
                WeddingData::sample(),
                "modern-minimal",
                QrMode::Venue,
            ))
            .await
            .unwrap();
        let invitation = service
            .compose(ComposeRequest::new(
                WeddingData::sample(),
                "modern-minimal",
                QrMode::Invitation,
            ))
            .await
            .unwrap();

        assert_ne!(venue.share.qr_payload, invitation.share.qr_payload);
        assert_ne!(venue.share.token, invitation.share.token);
        assert_eq!(invitation.share.qr_payload, invitation.share.share_link);
        assert_ne!(venue.qr, invitation.qr);
        assert!(invitation.html.contains("Scan to View Digital Invitation"));
    }

    #[tokio::test]
    async fn test_compose_uses_descriptor_image_style() {
        let mut source = MockTemplateSource::new();
        source
            .expect_fetch()
            .withf(|n| *n == 6)
            .returning(|_| Ok(TEMPLATE.to_string()));

        let composed = service(source)
            .compose(ComposeRequest::new(
                WeddingData::sample(),
                "dutch-save-the-date",
                QrMode::Invitation,
            ))
            .await
            .unwrap();

        assert!(composed.html.contains("object-fit: contain;"));
    }

    #[tokio::test]
    async fn test_compose_unknown_template() {
        let mut source = MockTemplateSource::new();
        source.expect_fetch().times(0);

        let result = service(source)
            .compose(ComposeRequest::new(
                WeddingData::sample(),
                "gothic-castle",
                QrMode::Venue,
            ))
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_compose_template_load_failure() {
        let mut source = MockTemplateSource::new();
        source
            .expect_fetch()
            .returning(|n| Err(TemplateLoadError::NotFound(n)));

        let result = service(source)
            .compose(ComposeRequest::new(
                WeddingData::sample(),
                "rustic-charm",
                QrMode::Venue,
            ))
            .await;

        assert!(matches!(result, Err(AppError::TemplateUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_compose_rejects_blank_field() {
        let mut data = WeddingData::sample();
        data.venue_name = "  ".to_string();

        let result = service(template_source())
            .compose(ComposeRequest::new(data, "elegant-floral", QrMode::Venue))
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_venue_qr_failure_degrades_to_link() {
        let mut data = WeddingData::sample();
        data.venue_address = format!("https://maps.example/{}", "x".repeat(300));

        let composed = service(template_source())
            .compose(ComposeRequest::new(data, "elegant-floral", QrMode::Venue))
            .await
            .unwrap();

        assert!(composed.qr.is_none());
        assert!(composed.html.contains("View on Google Maps"));
    }

    #[tokio::test]
    async fn test_script_venue_address_never_becomes_a_link() {
        let mut data = WeddingData::sample();
        data.venue_address = "javascript:alert(document.domain)".to_string();

        let composed = service(template_source())
            .compose(ComposeRequest::new(data, "elegant-floral", QrMode::Venue))
            .await
            .unwrap();

        assert!(!composed.html.contains("href=\"javascript:"));
        assert!(composed
            .html
            .contains("href=\"https://www.google.com/maps/search/?api=1"));
        assert!(composed
            .share
            .qr_payload
            .starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert_eq!(
            composed.request.data.venue_address,
            "javascript:alert(document.domain)"
        );
    }

    #[tokio::test]
    async fn test_render_payload_qr_rejects_oversized_payload() {
        let service = service(template_source());

        let result = service.render_payload_qr(&"x".repeat(300)).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));

        let result = service.render_qr(&"x".repeat(300)).await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_compose_shared_round_trip() {
        let service = service(template_source());
        let share = service
            .share(&ComposeRequest::new(
                WeddingData::sample(),
                "romantic-script",
                QrMode::Invitation,
            ))
            .unwrap();

        let composed = service.compose_shared(&share.token).await.unwrap();

        assert_eq!(composed.descriptor.id, "romantic-script");
        assert_eq!(composed.request.mode, QrMode::Invitation);
        assert_eq!(composed.share, share);
        assert!(composed.qr.is_some());
    }

    #[tokio::test]
    async fn test_compose_shared_venue_mode_shows_link_only() {
        let service = service(template_source());
        let share = service
            .share(&ComposeRequest::new(
                WeddingData::sample(),
                "rustic-charm",
                QrMode::Venue,
            ))
            .unwrap();

        let composed = service.compose_shared(&share.token).await.unwrap();

        assert!(composed.qr.is_none());
        assert!(composed.html.contains("View on Google Maps"));
        assert!(!composed.html.contains("<img"));
    }

    #[tokio::test]
    async fn test_compose_shared_invalid_token() {
        let result = service(template_source()).compose_shared("%%%").await;

        assert!(matches!(result, Err(AppError::InvalidLink { .. })));
    }

    #[tokio::test]
    async fn test_preview_marks_unavailable_templates() {
        let mut source = MockTemplateSource::new();
        source.expect_fetch().returning(|n| {
            if n == 3 {
                Err(TemplateLoadError::NotFound(n))
            } else {
                Ok(TEMPLATE.to_string())
            }
        });

        let previews = service(source).preview(&WeddingData::sample()).await;

        assert_eq!(previews.len(), 6);
        assert!(previews[2].html.is_none());
        assert!(previews[0]
            .html
            .as_deref()
            .unwrap()
            .contains("Michael Smith"));
    }

    #[test]
    fn test_download_file_name() {
        let composed = ComposedInvitation {
            request: ComposeRequest::new(WeddingData::sample(), "elegant-floral", QrMode::Venue),
            descriptor: TemplateCatalog::builtin().all()[0].clone(),
            position: 1,
            total: 6,
            previous_id: None,
            next_id: None,
            html: String::new(),
            share: ShareOutcome {
                token: String::new(),
                share_link: String::new(),
                qr_payload: String::new(),
            },
            qr: None,
            qr_region: QrRegion::Filled,
        };

        assert_eq!(
            composed.download_file_name(),
            "Sarah-Johnson-Michael-Smith-wedding-invitation.html"
        );
    }
}
