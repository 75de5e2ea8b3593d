//! Web layer for the browser-based invitation builder.
//!
//! Server-rendered pages for the form → gallery → details flow and for
//! shared invitations. Uses Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers and the HTML error page
//! - [`params`] - Wedding data carried in query strings
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod params;
pub mod routes;
