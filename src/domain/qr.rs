//! QR payload selection and the QR rendering seam.

use std::fmt;
use thiserror::Error;

use crate::domain::entities::QrMode;

/// Errors produced while turning a payload into an image.
#[derive(Debug, Error)]
pub enum QrError {
    #[error("Payload cannot be encoded as a QR code: {0}")]
    Encoding(String),

    #[error("QR image could not be written: {0}")]
    Image(String),
}

/// Image-encoded QR code of a payload string.
#[derive(Clone, PartialEq, Eq)]
pub struct QrArtifact {
    payload: String,
    mime_type: &'static str,
    bytes: Vec<u8>,
    data_uri: String,
}

impl QrArtifact {
    pub fn new(payload: impl Into<String>, mime_type: &'static str, bytes: Vec<u8>) -> Self {
        use base64::Engine as _;

        let data_uri = format!(
            "data:{};base64,{}",
            mime_type,
            base64::engine::general_purpose::STANDARD.encode(&bytes)
        );

        Self {
            payload: payload.into(),
            mime_type,
            bytes,
            data_uri,
        }
    }

    /// The string encoded in the QR code.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `data:` URI usable as an `<img src>`.
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

impl fmt::Debug for QrArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QrArtifact")
            .field("payload", &self.payload)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Turns a payload into a QR image.
///
/// Implementations must be deterministic: the same payload always yields the
/// same artifact.
///
/// # Implementations
///
/// - [`crate::infrastructure::qr::PngQrRenderer`] - PNG via the `qrcode` crate
/// - [`crate::infrastructure::qr::LastPayloadCache`] - single-entry cache decorator
pub trait QrRenderer: Send + Sync {
    /// Renders `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`QrError`] if the payload exceeds QR capacity or the image
    /// cannot be encoded.
    fn render(&self, payload: &str) -> Result<QrArtifact, QrError>;
}

/// Picks what the QR code points at.
///
/// # Examples
///
/// ```ignore
/// let venue = select_payload(QrMode::Venue, "https://maps.example/x", "https://site/invite?data=abc");
/// assert_eq!(venue, "https://maps.example/x");
/// ```
pub fn select_payload<'a>(mode: QrMode, venue_url: &'a str, share_link: &'a str) -> &'a str {
    match mode {
        QrMode::Venue => venue_url,
        QrMode::Invitation => share_link,
    }
}
