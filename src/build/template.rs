//! Per-document template selection.

use std::path::Path;

use super::document::FrontMatter;
use super::render::{DEFAULT_TEMPLATE, Renderer};
use crate::diagnostics::Diagnostic;

/// A template name that is known to be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef(String);

impl TemplateRef {
    pub fn default_template() -> Self {
        Self(DEFAULT_TEMPLATE.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// The template a document will be rendered with, plus the warning to
/// report if the requested one could not be used.
#[derive(Debug)]
pub struct TemplateResolution {
    pub template: TemplateRef,
    pub warning: Option<Diagnostic>,
}

/// Choose the template for a document.
///
/// No `template` key selects the default. A `template` naming something that
/// is not loaded (or that is not a string at all) also selects the default,
/// with a warning. Resolution never fails.
pub fn resolve_template(
    document: &Path,
    front_matter: &FrontMatter,
    renderer: &Renderer,
) -> TemplateResolution {
    let Some(requested) = front_matter.template() else {
        tracing::debug!("template not set in {}", document.display());
        return TemplateResolution {
            template: TemplateRef::default_template(),
            warning: None,
        };
    };

    match requested.as_str() {
        Some(name) if renderer.has_template(name) => {
            tracing::debug!("using template {} for {}", name, document.display());
            TemplateResolution {
                template: TemplateRef(name.to_string()),
                warning: None,
            }
        }
        _ => TemplateResolution {
            template: TemplateRef::default_template(),
            warning: Some(Diagnostic::TemplateFallback {
                document: document.to_path_buf(),
                requested: requested_display(requested),
                fallback: DEFAULT_TEMPLATE,
            }),
        },
    }
}

fn requested_display(value: &serde_yaml::Value) -> String {
    match value.as_str() {
        Some(name) => name.to_string(),
        None => serde_yaml::to_string(value)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}
