//! Repository trait for raw invitation template HTML.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while loading a template file.
#[derive(Debug, Error)]
pub enum TemplateLoadError {
    #[error("Template file template{0}.html does not exist")]
    NotFound(usize),

    #[error("Template file template{file_number}.html could not be read: {reason}")]
    Unreadable { file_number: usize, reason: String },
}

/// Source of raw template HTML.
///
/// Templates are addressed by their 1-based catalog position, matching the
/// `template<N>.html` file naming.
///
/// # Implementations
///
/// - [`crate::infrastructure::templates::FsTemplateSource`] - files on disk
/// - [`crate::infrastructure::templates::StaticTemplateSource`] - in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Loads the HTML of template file `file_number`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateLoadError::NotFound`] if no such file exists and
    /// [`TemplateLoadError::Unreadable`] on any other I/O failure.
    async fn fetch(&self, file_number: usize) -> Result<String, TemplateLoadError>;

    /// Checks that templates can be served.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
