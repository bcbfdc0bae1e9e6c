//! Configuration type definitions.
//!
//! This module contains the data structures read from a project's `config.yml`.
//! These types are pure data - no I/O or complex logic.

use std::collections::BTreeMap;

use serde::Deserialize;

// =============================================================================
// Project config
// =============================================================================

/// The project configuration, loaded once per run and never mutated.
///
/// ```yaml
/// var:
///   name: Ben
/// sync:
///   prod:
///     dest: user@host:/var/www/site
/// markdown:
///   extensions: [tables, strikethrough]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Project-wide variables, available to content and templates as `var.*`
    #[serde(default)]
    pub var: BTreeMap<String, serde_json::Value>,

    /// Sync destinations keyed by environment name
    #[serde(default)]
    pub sync: BTreeMap<String, SyncTarget>,

    /// Markdown processing settings
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

impl ProjectConfig {
    /// Look up the sync target for an environment.
    pub fn sync_target(&self, environment: &str) -> Option<&SyncTarget> {
        self.sync.get(environment)
    }
}

// =============================================================================
// Sync config
// =============================================================================

/// Where the build tree is mirrored to for one environment.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncTarget {
    /// Destination argument handed to the sync tool (e.g. `host:/srv/www`)
    pub dest: String,
}

// =============================================================================
// Markdown config
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    /// Extensions to enable for markdown processing
    #[serde(default = "default_markdown_extensions")]
    pub extensions: Vec<String>,
}

fn default_markdown_extensions() -> Vec<String> {
    vec!["strikethrough".to_string(), "tables".to_string()]
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            extensions: default_markdown_extensions(),
        }
    }
}
