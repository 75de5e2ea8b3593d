//! # Wedding Invite
//!
//! A stateless wedding invitation builder built with Axum.
//!
//! A couple enters their names, the date and the venue, picks one of six
//! designs and gets back a finished invitation page. The invitation can be
//! downloaded or shared through a link that carries all of its data, with a
//! QR code pointing at either the venue or the shared invitation itself.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Wedding data, catalog, placeholder
//!   substitution, share codec and QR region rendering
//! - **Application Layer** ([`application`]) - Invitation composition and the
//!   last-write-wins editing session
//! - **Infrastructure Layer** ([`infrastructure`]) - Template files and QR image rendering
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - Form, gallery, details and shared invitation pages
//!
//! ## Features
//!
//! - Six built-in designs, navigable in catalog order
//! - Share links with no server-side storage
//! - Venue or digital-invitation QR codes rendered as PNG
//! - Standalone HTML download of the finished invitation
//! - Rate limiting and structured logging
//!
//! ## Quick Start
//!
//! ```bash
//! export PUBLIC_ORIGIN="https://invites.example.com"
//! export TEMPLATES_DIR="static/templates"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ComposeRequest, InvitationService};
    pub use crate::application::session::InvitationSession;
    pub use crate::domain::catalog::TemplateCatalog;
    pub use crate::domain::entities::{QrMode, WeddingData};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
