use std::sync::Arc;

use crate::application::services::InvitationService;
use crate::domain::catalog::TemplateCatalog;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub invitation_service: Arc<InvitationService>,
}

impl AppState {
    pub fn new(invitation_service: InvitationService) -> Self {
        Self {
            invitation_service: Arc::new(invitation_service),
        }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        self.invitation_service.catalog()
    }
}
