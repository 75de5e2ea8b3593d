//! Template sources.
//!
//! Provides two [`TemplateSource`](crate::domain::repositories::TemplateSource)
//! implementations:
//! - [`FsTemplateSource`] - `template<N>.html` files in a directory
//! - [`StaticTemplateSource`] - In-memory templates for tests and the CLI

mod fs_template_source;
mod static_template_source;

pub use fs_template_source::FsTemplateSource;
pub use static_template_source::StaticTemplateSource;

/// File name of template file `file_number`.
pub fn template_file_name(file_number: usize) -> String {
    format!("template{}.html", file_number)
}
