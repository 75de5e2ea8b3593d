//! Wedding details form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use std::collections::BTreeMap;
use validator::Validate;

use crate::domain::entities::WeddingData;
use crate::error::field_messages;
use crate::web::params::WeddingParams;

/// One labelled input of the form.
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "form.html")]
pub struct FormTemplate {
    pub fields: Vec<FormField>,
}

impl FormTemplate {
    fn new(data: WeddingData, mut errors: BTreeMap<String, String>) -> Self {
        let mut field = |name: &'static str, label, input_type, value: String| FormField {
            name,
            label,
            input_type,
            value,
            error: errors.remove(name),
        };

        let fields = vec![
            field("brideName", "Bride's Name", "text", data.bride_name),
            field("groomName", "Groom's Name", "text", data.groom_name),
            field(
                "weddingDateTime",
                "Wedding Date & Time",
                "datetime-local",
                data.wedding_date_time,
            ),
            field("venueName", "Venue Name", "text", data.venue_name),
            field(
                "venueAddress",
                "Venue Address or Google Maps Link",
                "text",
                data.venue_address,
            ),
        ];

        Self { fields }
    }
}

/// Renders the form, prefilled from the query string or sample data.
///
/// # Endpoint
///
/// `GET /form`
///
/// Each non-empty query parameter overrides the matching sample value, so
/// "Edit" links from later pages bring the couple's data back.
pub async fn form_handler(Query(params): Query<WeddingParams>) -> impl IntoResponse {
    FormTemplate::new(params.prefill(), BTreeMap::new())
}

/// Validates the form and moves on to the template gallery.
///
/// # Endpoint
///
/// `POST /form`
///
/// # Responses
///
/// - **303 See Other** to `/preview?<wedding data>` when every field is filled
/// - **422 Unprocessable Entity** with the form and per-field messages otherwise
pub async fn submit_form_handler(Form(params): Form<WeddingParams>) -> Response {
    let data = params.submitted();

    match data.validate() {
        Ok(()) => Redirect::to(&format!("/preview?{}", data.to_query_string())).into_response(),
        Err(errors) => {
            tracing::debug!("Form rejected: {}", errors);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                FormTemplate::new(data, field_messages(&errors)),
            )
                .into_response()
        }
    }
}
