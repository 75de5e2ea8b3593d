//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `/`, `/form`, `/preview`, `/details/*`, `/invite` - Web pages
//! - `GET  /qr.png`      - QR code image
//! - `GET  /health`      - Health check (public)
//! - `/api/*`            - JSON API (rate limited)
//! - `/templates/*`      - Raw template files
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the JSON API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, qr_png_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
/// - `templates_dir` - directory of raw template files served under `/templates`
pub fn app_router(state: AppState, static_dir: &Path, templates_dir: &Path) -> NormalizePath<Router> {
    let api_router = api::routes::routes().layer(rate_limit::layer());

    let router = Router::new()
        .merge(web::routes::routes())
        .route("/qr.png", get(qr_png_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/templates", ServeDir::new(templates_dir))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
