//! Domain entities.
//!
//! - [`WeddingData`] - the details entered by the couple
//! - [`TemplateDescriptor`] - metadata of one invitation design
//! - [`InvitationShareRecord`] - the record serialized into share links

pub mod share_record;
pub mod template;
pub mod wedding;

pub use share_record::{InvitationShareRecord, QrMode};
pub use template::TemplateDescriptor;
pub use wedding::WeddingData;
