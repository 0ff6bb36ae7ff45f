use tera::Context;

use crate::error::{MsgenError, Result};
use crate::resolve::FeatureFlags;

/// Which placeholders a template job is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    /// No placeholders; the template is copied.
    Verbatim,
    /// `package_name`
    Package,
    /// `base_name`
    BaseName,
    /// `image_name`
    Image,
    /// `image_name`, `registry`
    Push,
    /// Every [`FeatureFlags`] field.
    Manifest,
}

impl ContextKind {
    pub fn build(self, flags: &FeatureFlags) -> Result<Context> {
        let mut context = Context::new();
        match self {
            Self::Verbatim => {}
            Self::Package => context.insert("package_name", &flags.package_name),
            Self::BaseName => context.insert("base_name", &flags.base_name),
            Self::Image => context.insert("image_name", &flags.image_name),
            Self::Push => {
                context.insert("image_name", &flags.image_name);
                context.insert("registry", &flags.registry);
            }
            Self::Manifest => return build_context(flags),
        }
        Ok(context)
    }
}

/// Build a Tera context holding every feature flag.
pub fn build_context(flags: &FeatureFlags) -> Result<Context> {
    Context::from_serialize(flags).map_err(|e| MsgenError::RenderError {
        file: "(feature flags)".to_string(),
        source: e,
    })
}
