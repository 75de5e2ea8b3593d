//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Field names are camelCase to match the share-link
//! record format.

pub mod health;
pub mod invitation;
pub mod qr;
pub mod render;
pub mod share;
pub mod templates;
