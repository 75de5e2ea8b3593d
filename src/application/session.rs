//! Last-write-wins holder of the invitation being edited.
//!
//! Every submission takes a request id from a monotonically increasing
//! counter. When its compose finishes, the result is only applied if no newer
//! submission has started in the meantime; otherwise it is discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::application::services::{ComposeRequest, ComposedInvitation, InvitationService};
use crate::error::AppError;

/// Result of [`InvitationSession::submit`].
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// The compose was the latest and is now the current invitation.
    Applied(Arc<ComposedInvitation>),
    /// A newer submission started first; the result was dropped.
    Stale { request_id: u64 },
}

impl SubmitOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SubmitOutcome::Applied(_))
    }
}

/// The invitation state of one editing session.
pub struct InvitationSession {
    service: InvitationService,
    latest: AtomicU64,
    current: Mutex<Option<Arc<ComposedInvitation>>>,
}

impl InvitationSession {
    pub fn new(service: InvitationService) -> Self {
        Self {
            service,
            latest: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    pub fn service(&self) -> &InvitationService {
        &self.service
    }

    /// Id of the most recent submission, 0 before the first one.
    pub fn latest_request(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// The last applied invitation.
    pub fn current(&self) -> Option<Arc<ComposedInvitation>> {
        self.current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Composes `request` and applies it unless a newer submission started
    /// while it was running.
    ///
    /// # Errors
    ///
    /// Returns the compose error of the latest submission. Errors of stale
    /// submissions are discarded like their results.
    pub async fn submit(&self, request: ComposeRequest) -> Result<SubmitOutcome, AppError> {
        let request_id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        match self.service.compose(request).await {
            Ok(composed) => Ok(self.commit(request_id, composed)),
            Err(_) if self.is_stale(request_id) => {
                tracing::debug!(request_id, "Discarding failed stale compose");
                Ok(SubmitOutcome::Stale { request_id })
            }
            Err(e) => Err(e),
        }
    }

    fn is_stale(&self, request_id: u64) -> bool {
        self.latest.load(Ordering::SeqCst) != request_id
    }

    fn commit(&self, request_id: u64, composed: ComposedInvitation) -> SubmitOutcome {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());

        if self.is_stale(request_id) {
            tracing::debug!(
                request_id,
                latest = self.latest_request(),
                "Discarding stale compose result"
            );
            return SubmitOutcome::Stale { request_id };
        }

        let composed = Arc::new(composed);
        *current = Some(Arc::clone(&composed));
        SubmitOutcome::Applied(composed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::TemplateCatalog;
    use crate::domain::entities::{QrMode, WeddingData};
    use crate::domain::qr::{QrArtifact, QrError, QrRenderer};
    use crate::domain::repositories::{TemplateLoadError, TemplateSource};
    use async_trait::async_trait;
    use std::time::Duration;

    /// Template 1 is slow, every other template answers immediately.
    struct SlowFirstTemplate;

    #[async_trait]
    impl TemplateSource for SlowFirstTemplate {
        async fn fetch(&self, file_number: usize) -> Result<String, TemplateLoadError> {
            if file_number == 1 {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            if file_number == 5 {
                return Err(TemplateLoadError::NotFound(5));
            }
            Ok(format!(
                r#"<p>{{{{brideName}}}} #{}</p><div id="qrcode"></div>"#,
                file_number
            ))
        }

        async fn health_check(&self) -> bool {
            true
        }
    }

    struct FakeQr;

    impl QrRenderer for FakeQr {
        fn render(&self, payload: &str) -> Result<QrArtifact, QrError> {
            Ok(QrArtifact::new(payload, "image/png", vec![7]))
        }
    }

    fn session() -> InvitationSession {
        InvitationSession::new(InvitationService::new(
            Arc::new(TemplateCatalog::builtin()),
            Arc::new(SlowFirstTemplate),
            Arc::new(FakeQr),
            "http://localhost:3000",
        ))
    }

    fn request(template_id: &str) -> ComposeRequest {
        ComposeRequest::new(WeddingData::sample(), template_id, QrMode::Venue)
    }

    #[tokio::test]
    async fn test_submit_applies_result() {
        let session = session();

        let outcome = session.submit(request("rustic-charm")).await.unwrap();

        assert!(outcome.is_applied());
        assert_eq!(session.latest_request(), 1);
        let current = session.current().unwrap();
        assert_eq!(current.descriptor.id, "rustic-charm");
        assert!(current.html.contains("Sarah Johnson #2"));
    }

    #[tokio::test]
    async fn test_stale_result_never_overwrites_newer_state() {
        let session = session();

        let (slow, fast) = tokio::join!(
            session.submit(request("elegant-floral")),
            session.submit(request("modern-minimal")),
        );

        assert!(matches!(slow.unwrap(), SubmitOutcome::Stale { request_id: 1 }));
        assert!(fast.unwrap().is_applied());
        assert_eq!(session.current().unwrap().descriptor.id, "modern-minimal");
    }

    #[tokio::test]
    async fn test_background_submissions_keep_latest_pick() {
        let session = Arc::new(session());
        let mut handles = Vec::new();

        for template_id in ["elegant-floral", "rustic-charm"] {
            let worker = Arc::clone(&session);
            handles.push(tokio::spawn(async move { worker.submit(request(template_id)).await }));
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        let mut outcomes = Vec::new();
        for handle in handles {
            outcomes.push(handle.await.unwrap().unwrap());
        }

        assert!(matches!(outcomes[0], SubmitOutcome::Stale { request_id: 1 }));
        assert!(outcomes[1].is_applied());
        assert_eq!(session.latest_request(), 2);
        assert_eq!(session.current().unwrap().descriptor.id, "rustic-charm");
    }

    #[tokio::test]
    async fn test_newer_failure_supersedes_older_result() {
        let session = Arc::new(session());

        let failing = {
            let session = Arc::clone(&session);
            tokio::spawn(async move {
                // Start after the slow submission has taken id 1.
                tokio::time::sleep(Duration::from_millis(20)).await;
                session.submit(request("tropical-paradise")).await
            })
        };
        let older = session.submit(request("elegant-floral")).await.unwrap();

        assert!(matches!(older, SubmitOutcome::Stale { request_id: 1 }));
        assert!(failing.await.unwrap().is_err());
        assert!(session.current().is_none());
    }

    #[tokio::test]
    async fn test_latest_error_is_returned() {
        let session = session();
        session.submit(request("rustic-charm")).await.unwrap();

        let result = session.submit(request("tropical-paradise")).await;

        assert!(matches!(result, Err(AppError::TemplateUnavailable { .. })));
        assert_eq!(session.current().unwrap().descriptor.id, "rustic-charm");
    }
}
