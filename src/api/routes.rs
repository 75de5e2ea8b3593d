//! API route configuration.

use crate::api::handlers::{invitation_handler, render_handler, share_handler, templates_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /templates`    - Template catalog
/// - `POST /share`        - Build a share link and QR payload
/// - `GET  /invitations`  - Decode a share token
/// - `POST /render`       - Compose the final invitation HTML
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/templates", get(templates_handler))
        .route("/share", post(share_handler))
        .route("/invitations", get(invitation_handler))
        .route("/render", post(render_handler))
}
