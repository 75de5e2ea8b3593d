//! Single-entry cache in front of a QR renderer.

use std::sync::Mutex;
use tracing::trace;

use crate::domain::qr::{QrArtifact, QrError, QrRenderer};

/// Keeps the artifact of the last rendered payload.
///
/// Rendering the same payload twice in a row, which is what happens when the
/// preview is refreshed or toggled back, returns the stored artifact.
pub struct LastPayloadCache<R> {
    inner: R,
    last: Mutex<Option<QrArtifact>>,
}

impl<R: QrRenderer> LastPayloadCache<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            last: Mutex::new(None),
        }
    }

    fn cached(&self, payload: &str) -> Option<QrArtifact> {
        let last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        last.as_ref()
            .filter(|artifact| artifact.payload() == payload)
            .cloned()
    }
}

impl<R: QrRenderer> QrRenderer for LastPayloadCache<R> {
    fn render(&self, payload: &str) -> Result<QrArtifact, QrError> {
        if let Some(artifact) = self.cached(payload) {
            trace!("QR cache hit");
            return Ok(artifact);
        }

        let artifact = self.inner.render(payload)?;
        *self.last.lock().unwrap_or_else(|e| e.into_inner()) = Some(artifact.clone());

        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingRenderer {
        calls: AtomicUsize,
    }

    impl QrRenderer for CountingRenderer {
        fn render(&self, payload: &str) -> Result<QrArtifact, QrError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if payload.is_empty() {
                return Err(QrError::Encoding("empty".to_string()));
            }
            Ok(QrArtifact::new(payload, "image/png", payload.as_bytes().to_vec()))
        }
    }

    #[test]
    fn test_repeated_payload_hits_cache() {
        let cache = LastPayloadCache::new(CountingRenderer::default());

        let a = cache.render("one").unwrap();
        let b = cache.render("one").unwrap();

        assert_eq!(a, b);
        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_only_last_payload_is_kept() {
        let cache = LastPayloadCache::new(CountingRenderer::default());

        cache.render("one").unwrap();
        cache.render("two").unwrap();
        cache.render("one").unwrap();

        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = LastPayloadCache::new(CountingRenderer::default());

        cache.render("one").unwrap();
        assert!(cache.render("").is_err());
        cache.render("one").unwrap();

        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 2);
    }
}
