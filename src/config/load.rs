//! Configuration loading from files.
//!
//! This module handles reading and parsing the project's `config.yml`.

use std::path::Path;

use super::{ConfigError, ProjectConfig};

impl ProjectConfig {
    /// Load the config from a file path.
    ///
    /// An empty file is treated as a config with every section defaulted.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a config from YAML text.
    pub(crate) fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
