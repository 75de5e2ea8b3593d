//! QR code rendering.
//!
//! - [`PngQrRenderer`] - Encodes payloads as PNG images
//! - [`LastPayloadCache`] - Remembers the most recent artifact of any renderer

mod cache;
mod png_renderer;

pub use cache::LastPayloadCache;
pub use png_renderer::{PNG_MIME_TYPE, PngQrRenderer};
