use std::collections::BTreeMap;
use std::path::PathBuf;

// =============================================================================
// Front matter
// =============================================================================

/// Front matter metadata parsed from a document.
///
/// Keys are strings; values are kept as arbitrary YAML. The keys with
/// meaning to the build are `title` and `template`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: BTreeMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.fields.get(key)
    }

    /// The `title` value in display form, if the key is present.
    pub fn title(&self) -> Option<String> {
        self.get("title").map(display_value)
    }

    /// The raw `template` value, if the key is present.
    pub fn template(&self) -> Option<&serde_yaml::Value> {
        self.get("template")
    }
}

impl FromIterator<(String, serde_yaml::Value)> for FrontMatter {
    fn from_iter<I: IntoIterator<Item = (String, serde_yaml::Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Render a YAML value the way it should appear in a page.
fn display_value(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => String::new(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Tagged(tagged) => display_value(&tagged.value),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

/// Result of parsing front matter from markdown content.
#[derive(Debug)]
pub struct ParsedContent {
    /// The parsed front matter (empty if none found or unparsable)
    pub front_matter: FrontMatter,
    /// The markdown content without the front matter block
    pub content: String,
    /// Why the front matter block was discarded, if it was
    pub error: Option<String>,
}

/// Parse front matter from markdown content.
///
/// Front matter is a YAML mapping delimited by `---` lines at the very start
/// of the file:
///
/// ```markdown
/// ---
/// title: My Page
/// template: post.html
/// ---
///
/// # Content starts here
/// ```
///
/// A block that is not a string-keyed YAML mapping still gets stripped from
/// the content; the front matter is then empty and `error` says why.
pub fn parse_front_matter(content: &str) -> ParsedContent {
    let no_front_matter = || ParsedContent {
        front_matter: FrontMatter::default(),
        content: content.to_string(),
        error: None,
    };

    let mut lines = content.split_inclusive('\n');
    match lines.next() {
        Some(first) if first.trim_end() == "---" => {}
        _ => return no_front_matter(),
    }

    // Find the closing delimiter, tracking byte offsets
    let mut offset = content.split_inclusive('\n').next().map_or(0, str::len);
    let yaml_start = offset;
    let mut yaml_end = None;
    for line in lines {
        if line.trim_end() == "---" {
            yaml_end = Some(offset);
            offset += line.len();
            break;
        }
        offset += line.len();
    }

    let Some(yaml_end) = yaml_end else {
        // No closing delimiter found, treat entire content as markdown
        return no_front_matter();
    };

    let yaml_content = &content[yaml_start..yaml_end];
    let markdown_content = content[offset..].to_string();

    let (front_matter, error) = match parse_yaml_mapping(yaml_content) {
        Ok(front_matter) => (front_matter, None),
        Err(e) => (FrontMatter::default(), Some(e)),
    };

    ParsedContent {
        front_matter,
        content: markdown_content,
        error,
    }
}

fn parse_yaml_mapping(yaml: &str) -> Result<FrontMatter, String> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
    match value {
        serde_yaml::Value::Null => Ok(FrontMatter::default()),
        serde_yaml::Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(key, value)| match key {
                serde_yaml::Value::String(key) => Ok((key, value)),
                other => Err(format!("front matter key {other:?} is not a string")),
            })
            .collect(),
        _ => Err("front matter is not a mapping".to_string()),
    }
}

// =============================================================================
// Documents
// =============================================================================

/// A markdown document read from the content tree.
///
/// Created per source file during traversal and dropped once its output
/// file has been written.
#[derive(Debug, Clone)]
pub struct ContentDocument {
    /// Path relative to the content root (e.g., "blog/first-post.md")
    pub source_path: PathBuf,
    /// The file exactly as read from disk
    pub raw: String,
    /// Front matter metadata
    pub front_matter: FrontMatter,
    /// The markdown body, without the front matter block
    pub body: String,
    /// Set when a front matter block was present but discarded
    pub front_matter_error: Option<String>,
}

impl ContentDocument {
    /// Split raw file text into front matter and markdown body.
    pub fn parse(source_path: PathBuf, raw: String) -> Self {
        let parsed = parse_front_matter(&raw);
        Self {
            source_path,
            front_matter: parsed.front_matter,
            body: parsed.content,
            front_matter_error: parsed.error,
            raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_front_matter_basic() {
        let content = r#"---
title: My Page
template: post.html
---

# Hello World
"#;
        let parsed = parse_front_matter(content);
        assert_eq!(parsed.front_matter.title(), Some("My Page".to_string()));
        assert_eq!(
            parsed.front_matter.template(),
            Some(&serde_yaml::Value::String("post.html".to_string()))
        );
        assert_eq!(parsed.content.trim(), "# Hello World");
        assert!(parsed.error.is_none());
    }

    #[test]
    fn test_parse_front_matter_with_custom_fields() {
        let content = r#"---
title: Custom Page
author: Jane Doe
tags:
  - rust
  - documentation
---
Content here
"#;
        let parsed = parse_front_matter(content);
        assert_eq!(parsed.front_matter.title(), Some("Custom Page".to_string()));
        assert!(parsed.front_matter.get("author").is_some());
        assert!(parsed.front_matter.get("tags").is_some());
        assert_eq!(parsed.content, "Content here\n");
    }

    #[test]
    fn test_parse_front_matter_no_front_matter() {
        let content = "# Just Markdown\n\nNo front matter here.";
        let parsed = parse_front_matter(content);
        assert_eq!(parsed.front_matter, FrontMatter::default());
        assert_eq!(parsed.content, content);
        assert!(parsed.error.is_none());
    }

    #[test]
    fn test_parse_front_matter_empty_front_matter() {
        let content = "---\n---\n\n# Content";
        let parsed = parse_front_matter(content);
        assert_eq!(parsed.front_matter, FrontMatter::default());
        assert_eq!(parsed.content.trim(), "# Content");
        assert!(parsed.error.is_none());
    }

    #[test]
    fn test_parse_front_matter_unclosed() {
        let content = "---\ntitle: Never Closed\n# Heading";
        let parsed = parse_front_matter(content);
        assert_eq!(parsed.front_matter, FrontMatter::default());
        assert_eq!(parsed.content, content);
    }

    #[test]
    fn test_parse_front_matter_must_start_the_file() {
        let content = "\n---\ntitle: Late\n---\nBody";
        let parsed = parse_front_matter(content);
        assert_eq!(parsed.front_matter, FrontMatter::default());
        assert_eq!(parsed.content, content);
    }

    #[test]
    fn test_parse_front_matter_invalid_yaml() {
        let content = "---\ntitle: [unclosed\n---\n# Still Here\n";
        let parsed = parse_front_matter(content);
        assert_eq!(parsed.front_matter, FrontMatter::default());
        assert!(parsed.error.is_some());
        assert_eq!(parsed.content, "# Still Here\n");
    }

    #[test]
    fn test_parse_front_matter_not_a_mapping() {
        let parsed = parse_front_matter("---\n- a\n- b\n---\nBody\n");
        assert_eq!(parsed.front_matter, FrontMatter::default());
        assert!(parsed.error.is_some());
        assert_eq!(parsed.content, "Body\n");
    }

    #[test]
    fn test_parse_front_matter_crlf() {
        let parsed = parse_front_matter("---\r\ntitle: Windows\r\n---\r\nBody\r\n");
        assert_eq!(parsed.front_matter.title(), Some("Windows".to_string()));
        assert_eq!(parsed.content, "Body\r\n");
    }

    #[test]
    fn test_title_display_forms() {
        let parsed = parse_front_matter("---\ntitle: 2024\n---\n");
        assert_eq!(parsed.front_matter.title(), Some("2024".to_string()));

        let parsed = parse_front_matter("---\ntitle:\n---\n");
        assert_eq!(parsed.front_matter.title(), Some(String::new()));

        let parsed = parse_front_matter("---\ntitle: true\n---\n");
        assert_eq!(parsed.front_matter.title(), Some("true".to_string()));
    }

    #[test]
    fn test_content_document_keeps_raw() {
        let raw = "---\ntitle: Kept\n---\nBody\n".to_string();
        let doc = ContentDocument::parse(PathBuf::from("a.md"), raw.clone());
        assert_eq!(doc.raw, raw);
        assert_eq!(doc.body, "Body\n");
        assert_eq!(doc.front_matter.title(), Some("Kept".to_string()));
        assert!(doc.front_matter_error.is_none());
    }
}
