//! HTML error pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Page-level error with a single way back.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: String,
    pub message: String,
    pub back_href: String,
    pub back_label: String,
}

/// An error rendered as an HTML page instead of the JSON envelope.
pub struct WebError {
    status: StatusCode,
    page: ErrorPage,
}

impl WebError {
    pub fn new(
        status: StatusCode,
        title: impl Into<String>,
        message: impl Into<String>,
        back_href: impl Into<String>,
        back_label: impl Into<String>,
    ) -> Self {
        Self {
            status,
            page: ErrorPage {
                title: title.into(),
                message: message.into(),
                back_href: back_href.into(),
                back_label: back_label.into(),
            },
        }
    }

    /// Redirects the back action, e.g. to keep the form data in the query.
    pub fn with_back(mut self, href: impl Into<String>, label: impl Into<String>) -> Self {
        self.page.back_href = href.into();
        self.page.back_label = label.into();
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<AppError> for WebError {
    fn from(e: AppError) -> Self {
        let title = match &e {
            AppError::Validation { .. } => "Missing Data",
            AppError::NotFound { .. } => "Template Not Available",
            AppError::InvalidLink { .. } => "Invalid Invitation",
            AppError::TemplateUnavailable { .. } => "Failed to load template",
            AppError::Internal { .. } => "Something went wrong",
        };
        if let AppError::Internal { details, .. } = &e {
            tracing::error!("Page failed: {} {}", e.message(), details);
        }

        WebError::new(e.status(), title, e.message(), "/", "Back to Home")
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        (self.status, self.page).into_response()
    }
}
