pub mod embedded;
pub mod source;

pub use source::TemplateSource;

/// Template ids ending in this suffix are rendered; all others are copied.
pub const TEMPLATE_SUFFIX: &str = ".tera";
