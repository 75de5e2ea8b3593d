//! Domain layer containing the invitation pipeline.
//!
//! Everything here is pure or trait-based and independent of HTTP and the
//! filesystem.
//!
//! # Architecture
//!
//! - [`entities`] - Wedding data, template descriptors, share records
//! - [`catalog`] - Ordered template catalog and navigation
//! - [`placeholders`] - `{{token}}` substitution with HTML escaping
//! - [`share_codec`] - Reversible share-link token codec
//! - [`qr`] - QR payload selection and the rendering seam
//! - [`renderer`] - QR region splicing into populated HTML
//! - [`repositories`] - Template source trait
//!
//! # Pipeline
//!
//! 1. Template HTML is loaded through [`repositories::TemplateSource`]
//! 2. [`placeholders::populate`] fills in the wedding data
//! 3. [`share_codec::encode`] produces the share token
//! 4. [`qr::select_payload`] picks the QR target, rendered by a [`qr::QrRenderer`]
//! 5. [`renderer::render`] splices the QR region into the page

pub mod catalog;
pub mod entities;
pub mod placeholders;
pub mod qr;
pub mod renderer;
pub mod repositories;
pub mod share_codec;
