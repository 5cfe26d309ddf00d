//! Renderer over the built-in bodies, with optional per-kind overrides.

use std::collections::HashMap;
use std::path::Path;

use ngfeat_core::{
    application::ports::TemplateRenderer,
    domain::{RenderContext, TemplateKind},
    error::NgfeatResult,
};
use tracing::{debug, instrument};

use crate::{builtin_templates, template_loader::TemplateOverrideLoader};

/// Substitutes a [`RenderContext`] into the body of each kind.
#[derive(Debug, Clone, Default)]
pub struct BuiltinRenderer {
    overrides: HashMap<TemplateKind, String>,
}

impl BuiltinRenderer {
    /// Renderer using only the built-in bodies.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: HashMap<TemplateKind, String>) -> Self {
        Self { overrides }
    }

    /// Renderer whose bodies are replaced by the `<kind>.tpl` files in `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> NgfeatResult<Self> {
        let overrides = TemplateOverrideLoader::new(dir.as_ref()).load()?;
        Ok(Self::with_overrides(overrides))
    }
}

impl TemplateRenderer for BuiltinRenderer {
    #[instrument(skip(self, context), fields(feature = %context.feature_name()))]
    fn render(&self, kind: TemplateKind, context: &RenderContext) -> NgfeatResult<String> {
        let body = match self.overrides.get(&kind) {
            Some(body) => {
                debug!(%kind, "using template override");
                body.as_str()
            }
            None => builtin_templates::body(kind),
        };
        Ok(context.render(body))
    }
}
