//! Template variables.
//!
//! Project variables are an immutable snapshot shared by every document.
//! Each document renders against a [`RunVariables`] overlay that adds its own
//! `title` without touching the snapshot.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key injected into the variables for each document.
const TITLE_KEY: &str = "title";

/// Project-wide variables from the config's `var` section.
#[derive(Debug, Clone, Default)]
pub struct ProjectVariables {
    values: BTreeMap<String, serde_json::Value>,
}

impl ProjectVariables {
    pub fn new(values: BTreeMap<String, serde_json::Value>) -> Self {
        Self { values }
    }

    /// Build the variables for one document.
    pub fn overlay<'a>(&'a self, title: &'a str) -> RunVariables<'a> {
        RunVariables {
            project: self,
            title,
        }
    }
}

/// The variables one document is rendered with: the project variables plus
/// that document's title, which shadows any project `title` entry.
#[derive(Debug, Clone, Copy)]
pub struct RunVariables<'a> {
    project: &'a ProjectVariables,
    title: &'a str,
}

impl RunVariables<'_> {
    pub fn title(&self) -> &str {
        self.title
    }
}

impl Serialize for RunVariables<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in &self.project.values {
            if key != TITLE_KEY {
                map.serialize_entry(key, value)?;
            }
        }
        map.serialize_entry(TITLE_KEY, self.title)?;
        map.end()
    }
}
