use std::collections::HashMap;
use std::error::Error as _;
use std::path::{Path, PathBuf};

use tera::{Context, Tera, Value};

use super::variables::RunVariables;
use crate::config::ConfigError;

/// Template every document falls back to.
pub const DEFAULT_TEMPLATE: &str = "default.html";

/// Tera's global functions. Content only interpolates variables, and a
/// rebuild must not depend on the clock or the environment.
const CONTENT_DISABLED_FUNCTIONS: [&str; 5] = ["range", "now", "throw", "get_random", "get_env"];

/// Substitution failures. Any of these aborts the whole build.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("content of {path} failed to render: {message}")]
    Content { path: PathBuf, message: String },

    #[error("content of {path} uses a statement tag; only {{{{ expressions }}}} are allowed")]
    ContentStatement { path: PathBuf },

    #[error("page {path} failed to render with template '{template}': {message}")]
    Page {
        path: PathBuf,
        template: String,
        message: String,
    },
}

/// The template renderer, wrapping Tera.
pub struct Renderer {
    tera: Tera,
    content_tera: Tera,
}

impl Renderer {
    /// Load every `.html` template under the templates directory.
    ///
    /// Template names are paths relative to that directory. Other files are
    /// ignored. Autoescaping is off: `content` is already HTML.
    pub fn new(templates_path: &Path) -> Result<Self, ConfigError> {
        if !templates_path.is_dir() {
            return Err(ConfigError::TemplatesNotFound(templates_path.to_path_buf()));
        }

        let glob = templates_path.join("**/*.html");
        let glob_str = glob.to_string_lossy();
        let mut tera = Tera::new(&glob_str).map_err(|e| ConfigError::Templates {
            path: templates_path.to_path_buf(),
            message: error_chain(&e),
        })?;
        tera.autoescape_on(vec![]);

        let renderer = Self {
            tera,
            content_tera: content_tera(),
        };
        if !renderer.has_template(DEFAULT_TEMPLATE) {
            return Err(ConfigError::MissingDefaultTemplate {
                name: DEFAULT_TEMPLATE,
                path: templates_path.to_path_buf(),
            });
        }

        Ok(renderer)
    }

    /// Returns true if a template with this name was loaded.
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|loaded| loaded == name)
    }

    /// Substitute variables in a document's rendered HTML.
    ///
    /// The content is evaluated on its own, so it cannot reach other
    /// templates, and statement tags are refused: only `{{ ... }}`
    /// expressions are available. Filters work; global functions do not.
    pub fn render_content(
        &self,
        path: &Path,
        content: &str,
        vars: &RunVariables,
    ) -> Result<String, RenderError> {
        if content.contains("{%") {
            return Err(RenderError::ContentStatement {
                path: path.to_path_buf(),
            });
        }

        let mut tera_context = Context::new();
        tera_context.insert("var", vars);

        self.content_tera
            .clone()
            .render_str(content, &tera_context)
            .map_err(|e| RenderError::Content {
                path: path.to_path_buf(),
                message: error_chain(&e),
            })
    }

    /// Wrap substituted content in a page template.
    pub fn render_page(
        &self,
        path: &Path,
        template: &str,
        content: &str,
        vars: &RunVariables,
    ) -> Result<String, RenderError> {
        let mut tera_context = Context::new();
        tera_context.insert("content", content);
        tera_context.insert("var", vars);

        self.tera
            .render(template, &tera_context)
            .map_err(|e| RenderError::Page {
                path: path.to_path_buf(),
                template: template.to_string(),
                message: error_chain(&e),
            })
    }
}

/// An empty Tera for the content pass, with the global functions replaced by
/// ones that fail.
fn content_tera() -> Tera {
    let mut engine = Tera::default();
    engine.autoescape_on(vec![]);
    for name in CONTENT_DISABLED_FUNCTIONS {
        engine.register_function(
            name,
            move |_: &HashMap<String, Value>| -> tera::Result<Value> {
                Err(tera::Error::msg(format!(
                    "function `{name}` is not available in content"
                )))
            },
        );
    }
    engine
}

/// Tera keeps the useful detail in the error's sources; flatten them.
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
