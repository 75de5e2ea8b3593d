//! Utility functions shared across layers.
//!
//! - [`date_format`] - Display formats for the wedding date

pub mod date_format;
