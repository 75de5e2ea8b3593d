//! Filesystem implementation of the template source.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::template_file_name;
use crate::domain::repositories::{TemplateLoadError, TemplateSource};

/// Reads `template<N>.html` files from a directory.
///
/// Files are read on every request, so edits show up without a restart.
pub struct FsTemplateSource {
    dir: PathBuf,
}

impl FsTemplateSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        debug!("Serving templates from {}", dir.display());
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, file_number: usize) -> PathBuf {
        self.dir.join(template_file_name(file_number))
    }
}

#[async_trait]
impl TemplateSource for FsTemplateSource {
    async fn fetch(&self, file_number: usize) -> Result<String, TemplateLoadError> {
        let path = self.path_for(file_number);

        match tokio::fs::read_to_string(&path).await {
            Ok(html) => Ok(html),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Template file missing: {}", path.display());
                Err(TemplateLoadError::NotFound(file_number))
            }
            Err(e) => {
                warn!("Failed to read template {}: {}", path.display(), e);
                Err(TemplateLoadError::Unreadable {
                    file_number,
                    reason: e.to_string(),
                })
            }
        }
    }

    async fn health_check(&self) -> bool {
        tokio::fs::metadata(&self.dir)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_with_template(html: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("template1.html"), html).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_fetch_existing_template() {
        let dir = dir_with_template("<p>{{brideName}}</p>");
        let source = FsTemplateSource::new(dir.path());

        let html = source.fetch(1).await.unwrap();

        assert_eq!(html, "<p>{{brideName}}</p>");
    }

    #[tokio::test]
    async fn test_fetch_missing_template() {
        let dir = dir_with_template("<p></p>");
        let source = FsTemplateSource::new(dir.path());

        let result = source.fetch(7).await;

        assert!(matches!(result, Err(TemplateLoadError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_fetch_sees_edits_without_restart() {
        let dir = dir_with_template("old");
        let source = FsTemplateSource::new(dir.path());
        assert_eq!(source.fetch(1).await.unwrap(), "old");

        std::fs::write(dir.path().join("template1.html"), "new").unwrap();

        assert_eq!(source.fetch(1).await.unwrap(), "new");
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = TempDir::new().unwrap();
        assert!(FsTemplateSource::new(dir.path()).health_check().await);
        assert!(
            !FsTemplateSource::new(dir.path().join("nope"))
                .health_check()
                .await
        );
    }
}
