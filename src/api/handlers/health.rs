//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Templates**: The template source can serve files
/// 2. **Catalog**: At least one template is registered
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "templates": { "status": "ok", "message": "Template source available" },
///     "catalog": { "status": "ok", "message": "6 templates" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let templates = check_templates(&state).await;
    let catalog = check_catalog(&state);

    let all_healthy = templates.is_ok() && catalog.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { templates, catalog },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_templates(state: &AppState) -> CheckStatus {
    if state.invitation_service.health_check().await {
        CheckStatus::ok("Template source available")
    } else {
        CheckStatus::error("Template source unavailable")
    }
}

fn check_catalog(state: &AppState) -> CheckStatus {
    match state.catalog().len() {
        0 => CheckStatus::error("No templates registered"),
        n => CheckStatus::ok(format!("{} templates", n)),
    }
}
