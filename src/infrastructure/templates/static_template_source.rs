//! In-memory template source.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::repositories::{TemplateLoadError, TemplateSource};

/// Templates held in memory, keyed by file number.
#[derive(Debug, Clone, Default)]
pub struct StaticTemplateSource {
    templates: HashMap<usize, String>,
}

impl StaticTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces template file `file_number`.
    pub fn with_template(mut self, file_number: usize, html: impl Into<String>) -> Self {
        self.templates.insert(file_number, html.into());
        self
    }
}

#[async_trait]
impl TemplateSource for StaticTemplateSource {
    async fn fetch(&self, file_number: usize) -> Result<String, TemplateLoadError> {
        self.templates
            .get(&file_number)
            .cloned()
            .ok_or(TemplateLoadError::NotFound(file_number))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch() {
        let source = StaticTemplateSource::new()
            .with_template(2, "two")
            .with_template(2, "second");

        assert_eq!(source.fetch(2).await.unwrap(), "second");
        assert!(matches!(
            source.fetch(1).await,
            Err(TemplateLoadError::NotFound(1))
        ));
    }
}
