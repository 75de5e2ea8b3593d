//! PNG QR renderer backed by the `qrcode` and `image` crates.

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;

use crate::domain::qr::{QrArtifact, QrError, QrRenderer};

pub const PNG_MIME_TYPE: &str = "image/png";

/// Renders payloads as black-on-white PNG QR codes.
#[derive(Debug, Clone, Copy)]
pub struct PngQrRenderer {
    min_dimension: u32,
}

impl PngQrRenderer {
    /// Creates a renderer whose images are at least `min_dimension` pixels square.
    pub fn new(min_dimension: u32) -> Self {
        Self { min_dimension }
    }

    pub fn min_dimension(&self) -> u32 {
        self.min_dimension
    }
}

impl Default for PngQrRenderer {
    fn default() -> Self {
        Self::new(200)
    }
}

impl QrRenderer for PngQrRenderer {
    fn render(&self, payload: &str) -> Result<QrArtifact, QrError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)
            .map_err(|e| QrError::Encoding(e.to_string()))?;

        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(self.min_dimension, self.min_dimension)
            .build();

        let mut bytes: Vec<u8> = Vec::new();
        DynamicImage::ImageLuma8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| QrError::Image(e.to_string()))?;

        tracing::debug!(
            payload_len = payload.len(),
            image_bytes = bytes.len(),
            "QR code rendered"
        );

        Ok(QrArtifact::new(payload, PNG_MIME_TYPE, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_png() {
        let renderer = PngQrRenderer::new(128);

        let artifact = renderer.render("https://maps.app.goo.gl/example123").unwrap();

        assert_eq!(artifact.mime_type(), "image/png");
        assert_eq!(&artifact.bytes()[..8], b"\x89PNG\r\n\x1a\n");
        assert!(artifact.data_uri().starts_with("data:image/png;base64,"));

        let decoded = image::load_from_memory(artifact.bytes()).unwrap();
        assert!(decoded.width() >= 128);
        assert_eq!(decoded.width(), decoded.height());
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = PngQrRenderer::default();

        let a = renderer.render("https://site/invite?data=abc").unwrap();
        let b = renderer.render("https://site/invite?data=abc").unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_payload_over_capacity() {
        let renderer = PngQrRenderer::default();
        let payload = "x".repeat(8000);

        let result = renderer.render(&payload);

        assert!(matches!(result, Err(QrError::Encoding(_))));
    }
}
