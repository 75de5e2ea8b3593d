//! Handler for the template catalog endpoint.

use axum::{Json, extract::State};

use crate::api::dto::templates::{TemplateItem, TemplateListResponse};
use crate::state::AppState;

/// Lists the template catalog in display order.
///
/// # Endpoint
///
/// `GET /api/templates`
///
/// # Response
///
/// ```json
/// {
///   "total": 6,
///   "items": [
///     {
///       "position": 1,
///       "id": "elegant-floral",
///       "name": "Elegant Floral",
///       "description": "...",
///       "primaryColor": "#7c3aed",
///       "secondaryColor": "#f3e8ff",
///       "fileUrl": "/templates/template1.html"
///     }
///   ]
/// }
/// ```
pub async fn templates_handler(State(state): State<AppState>) -> Json<TemplateListResponse> {
    let items: Vec<TemplateItem> = state
        .catalog()
        .all()
        .iter()
        .enumerate()
        .map(|(index, descriptor)| TemplateItem::new(index + 1, descriptor.clone()))
        .collect();

    Json(TemplateListResponse {
        total: items.len(),
        items,
    })
}
