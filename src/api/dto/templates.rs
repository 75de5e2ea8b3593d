//! DTOs for the template catalog endpoint.

use serde::Serialize;

use crate::domain::entities::TemplateDescriptor;
use crate::infrastructure::templates::template_file_name;

/// The template catalog in display order.
#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub total: usize,
    pub items: Vec<TemplateItem>,
}

/// One catalog entry with its position and raw file location.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    pub position: usize,
    #[serde(flatten)]
    pub descriptor: TemplateDescriptor,
    pub file_url: String,
}

impl TemplateItem {
    pub fn new(position: usize, descriptor: TemplateDescriptor) -> Self {
        Self {
            position,
            file_url: format!("/templates/{}", template_file_name(position)),
            descriptor,
        }
    }
}
