//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for template loading and QR image encoding.
//!
//! # Modules
//!
//! - [`templates`] - Template sources (filesystem and in-memory)
//! - [`qr`] - PNG QR rendering and the last-payload cache

pub mod qr;
pub mod templates;
