//! Handler for QR code images.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::qr::QrQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Serves the QR code of `payload` as an image.
///
/// # Endpoint
///
/// `GET /qr.png?payload=<text>`
///
/// The image only depends on the payload, so it is cacheable.
///
/// # Errors
///
/// - **400 Bad Request**: Empty payload, or one too long for a QR code
/// - **500 Internal Server Error**: The image could not be written
pub async fn qr_png_handler(
    State(state): State<AppState>,
    Query(query): Query<QrQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let artifact = state.invitation_service.render_payload_qr(&query.payload).await?;

    Ok((
        [
            (header::CONTENT_TYPE, artifact.mime_type()),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        artifact.bytes().to_vec(),
    ))
}
