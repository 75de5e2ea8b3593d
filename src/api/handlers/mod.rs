//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod invitations;
pub mod qr;
pub mod render;
pub mod share;
pub mod templates;

pub use health::health_handler;
pub use invitations::invitation_handler;
pub use qr::qr_png_handler;
pub use render::render_handler;
pub use share::share_handler;
pub use templates::templates_handler;
