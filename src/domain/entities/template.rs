//! Invitation template descriptor.

use serde::Serialize;

/// Inline style applied to the QR image when a template has no custom style.
pub const DEFAULT_QR_IMAGE_STYLE: &str = "width: 120px; height: 120px;";

/// Describes one invitation design in the catalog.
///
/// The HTML body of a design lives in a separate static file; the descriptor
/// only carries presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub primary_color: String,
    pub secondary_color: String,
    /// Inline style for the embedded QR image, overriding [`DEFAULT_QR_IMAGE_STYLE`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_style: Option<String>,
}

impl TemplateDescriptor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        primary_color: impl Into<String>,
        secondary_color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            primary_color: primary_color.into(),
            secondary_color: secondary_color.into(),
            custom_style: None,
        }
    }

    pub fn with_custom_style(mut self, style: impl Into<String>) -> Self {
        self.custom_style = Some(style.into());
        self
    }

    /// Style to put on the QR `<img>` element.
    pub fn qr_image_style(&self) -> &str {
        self.custom_style.as_deref().unwrap_or(DEFAULT_QR_IMAGE_STYLE)
    }
}
