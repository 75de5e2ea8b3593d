//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations: catalog lookup, template
//! loading, substitution, share-link encoding, QR rendering and splicing.
//! Handlers and the CLI talk to this layer only.
//!
//! # Available Services
//!
//! - [`services::invitation_service::InvitationService`] - Invitation pipeline
//! - [`session::InvitationSession`] - Last-write-wins editing state

pub mod services;
pub mod session;
