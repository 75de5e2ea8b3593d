//! HTTP server initialization and runtime setup.
//!
//! Wires the template source, QR renderer and invitation service together and
//! runs the Axum server until shutdown.

use crate::application::services::InvitationService;
use crate::config::Config;
use crate::domain::catalog::TemplateCatalog;
use crate::infrastructure::qr::{LastPayloadCache, PngQrRenderer};
use crate::infrastructure::templates::FsTemplateSource;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state from configuration.
pub fn build_state(config: &Config) -> AppState {
    let catalog = Arc::new(TemplateCatalog::builtin());
    let templates = Arc::new(FsTemplateSource::new(&config.templates_dir));
    let qr_renderer = Arc::new(LastPayloadCache::new(PngQrRenderer::new(
        config.qr_min_dimension,
    )));

    AppState::new(InvitationService::new(
        catalog,
        templates,
        qr_renderer,
        config.public_origin.clone(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Filesystem template source
/// - PNG QR renderer with the last-payload cache
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);

    if !state.invitation_service.health_check().await {
        tracing::warn!(
            "Templates directory {} is not readable; invitations will fail to load",
            config.templates_dir.display()
        );
    }

    let app = app_router(state, &config.static_dir, &config.templates_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
