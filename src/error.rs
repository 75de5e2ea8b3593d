use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fmt;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::domain::placeholders::PopulateError;
use crate::domain::qr::QrError;
use crate::domain::repositories::TemplateLoadError;
use crate::domain::share_codec::DecodeError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    InvalidLink { message: String, details: Value },
    TemplateUnavailable { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_link(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidLink {
            message: message.into(),
            details,
        }
    }
    pub fn template_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::TemplateUnavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidLink { .. } => StatusCode::BAD_REQUEST,
            AppError::TemplateUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::InvalidLink { .. } => "invalid_link",
            AppError::TemplateUnavailable { .. } => "template_unavailable",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::InvalidLink { message, .. }
            | AppError::TemplateUnavailable { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::InvalidLink { details, .. }
            | AppError::TemplateUnavailable { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::InvalidLink { message, details }
            | AppError::TemplateUnavailable { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<DecodeError> for AppError {
    fn from(e: DecodeError) -> Self {
        AppError::invalid_link(
            "Invalid or incomplete invitation link",
            json!({ "reason": e.to_string() }),
        )
    }
}

impl From<TemplateLoadError> for AppError {
    fn from(e: TemplateLoadError) -> Self {
        tracing::error!("Template load failed: {}", e);
        AppError::template_unavailable("Failed to load template", json!({ "reason": e.to_string() }))
    }
}

impl From<PopulateError> for AppError {
    fn from(e: PopulateError) -> Self {
        match e {
            PopulateError::MissingField(field) => AppError::bad_request(
                "Wedding data is incomplete",
                json!({ "field": field, "reason": e.to_string() }),
            ),
        }
    }
}

impl From<QrError> for AppError {
    fn from(e: QrError) -> Self {
        AppError::internal(
            "Failed to generate QR code",
            json!({ "reason": e.to_string() }),
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let fields: serde_json::Map<String, Value> = field_messages(&e)
            .into_iter()
            .map(|(field, message)| (field, Value::String(message)))
            .collect();

        AppError::bad_request("Validation failed", json!({ "fields": fields }))
    }
}

/// Flattens validation errors into one message per field.
///
/// Keys are camelCase to match the form and JSON field names. Errors of
/// nested structs are merged into the same map.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    let mut messages = BTreeMap::new();
    collect_field_messages(errors, &mut messages);
    messages
}

fn collect_field_messages(errors: &ValidationErrors, messages: &mut BTreeMap<String, String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                if let Some(err) = field_errors.first() {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    messages.insert(to_camel_case(field), message);
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_field_messages(nested, messages),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_field_messages(nested, messages);
                }
            }
        }
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_maps_to_invalid_link() {
        let err: AppError = DecodeError::InvalidEncoding.into();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "invalid_link");
    }

    #[test]
    fn test_template_load_error_maps_to_unavailable() {
        let err: AppError = TemplateLoadError::NotFound(3).into();

        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.details()["reason"]
            .as_str()
            .unwrap()
            .contains("template3.html"));
    }

    #[test]
    fn test_populate_error_names_field() {
        let err: AppError = PopulateError::MissingField("venueName").into();

        assert_eq!(err.code(), "validation_error");
        assert_eq!(err.details()["field"], "venueName");
    }

    #[test]
    fn test_validation_errors_use_camel_case_fields() {
        let errors = crate::domain::entities::WeddingData::new("", "Michael", "2024-09-21T16:00", " ", "x")
            .unwrap_err();

        let messages = field_messages(&errors);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages["brideName"], "This field is required");
        assert_eq!(messages["venueName"], "This field is required");

        let err: AppError = errors.into();
        assert_eq!(err.details()["fields"]["brideName"], "This field is required");
    }

    #[test]
    fn test_display() {
        let err = AppError::not_found("Template not found", json!({}));

        assert_eq!(err.to_string(), "not_found: Template not found");
    }
}
