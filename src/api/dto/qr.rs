//! DTOs for the QR image endpoint.

use serde::Deserialize;
use validator::Validate;

/// Query string of `GET /qr.png`.
#[derive(Debug, Deserialize, Validate)]
pub struct QrQuery {
    #[validate(length(min = 1, max = 2048, message = "Payload must be 1-2048 characters"))]
    pub payload: String,
}
