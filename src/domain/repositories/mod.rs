//! Repository trait definitions for the domain layer.
//!
//! Traits define where template HTML comes from; implementations live in
//! `crate::infrastructure::templates`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`TemplateSource`] - Raw invitation template HTML by file number

pub mod template_source;

pub use template_source::{TemplateLoadError, TemplateSource};

#[cfg(test)]
pub use template_source::MockTemplateSource;
