//! Recoverable problems found during a run.
//!
//! A [`Diagnostics`] handle is created per command and passed down by
//! reference. Each recorded warning is also emitted as a `WARN` event.

use std::fmt;
use std::path::PathBuf;

/// A problem the build recovered from on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A document asked for a template that does not exist; the fallback was used.
    TemplateFallback {
        document: PathBuf,
        requested: String,
        fallback: &'static str,
    },

    /// A front matter block could not be read and was treated as empty.
    InvalidFrontMatter { document: PathBuf, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::TemplateFallback {
                document,
                requested,
                fallback,
            } => write!(
                f,
                "invalid template \"{}\" for source \"{}\", falling back to \"{}\"",
                requested,
                document.display(),
                fallback
            ),
            Diagnostic::InvalidFrontMatter { document, reason } => write!(
                f,
                "ignoring front matter of \"{}\": {}",
                document.display(),
                reason
            ),
        }
    }
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.warnings.push(diagnostic);
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}
