//! Business logic services for the application layer.

pub mod invitation_service;

pub use invitation_service::{
    ComposeRequest, ComposedInvitation, InvitationService, ShareOutcome, TemplatePreview,
};
