//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    details_handler, download_handler, form_handler, home_handler, invite_handler,
    preview_handler, submit_form_handler,
};
use axum::{Router, routing::get};

/// Browser-facing pages.
///
/// # Endpoints
///
/// - `GET  /`                               - Landing page
/// - `GET  /form`                           - Wedding details form
/// - `POST /form`                           - Validate and continue to the gallery
/// - `GET  /preview`                        - Template gallery
/// - `GET  /details/{template_id}`          - Single template view
/// - `GET  /details/{template_id}/download` - Finished invitation as a file
/// - `GET  /invite`                         - Shared invitation
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/form", get(form_handler).post(submit_form_handler))
        .route("/preview", get(preview_handler))
        .route("/details/{template_id}", get(details_handler))
        .route("/details/{template_id}/download", get(download_handler))
        .route("/invite", get(invite_handler))
}
