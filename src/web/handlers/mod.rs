//! HTML page handlers.

pub mod details;
pub mod error;
mod form;
mod home;
pub mod invite;
mod preview;

pub use details::{details_handler, download_handler};
pub use error::{ErrorPage, WebError};
pub use form::{form_handler, submit_form_handler};
pub use home::home_handler;
pub use invite::invite_handler;
pub use preview::preview_handler;
