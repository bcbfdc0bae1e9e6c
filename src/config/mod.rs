//! Project configuration.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for config structures (`types`)
//! - Loading configs from files (`load`)

mod load;
mod types;

use std::path::PathBuf;

use crate::build::MarkdownError;

pub use types::{MarkdownConfig, ProjectConfig};

// =============================================================================
// Errors
// =============================================================================

/// Fatal configuration problems, detected before any output is touched.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid markdown config: {0}")]
    Markdown(#[from] MarkdownError),

    #[error("no sync destination configured for environment '{0}'")]
    UnknownEnvironment(String),

    #[error("content directory not found: {0}")]
    ContentNotFound(PathBuf),

    #[error("templates directory not found: {0}")]
    TemplatesNotFound(PathBuf),

    #[error("failed to load templates from {path}: {message}")]
    Templates { path: PathBuf, message: String },

    #[error("default template '{name}' is missing from {path}")]
    MissingDefaultTemplate { name: &'static str, path: PathBuf },
}
