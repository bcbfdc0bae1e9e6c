//! Path utilities.
//!
//! This module handles:
//! - The fixed layout of a project directory (config, content, templates, build)
//! - Mapping content-relative source paths to build-relative output paths

use std::path::{Path, PathBuf};

/// Extension of files that are rendered rather than copied.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Extension given to rendered documents.
pub const HTML_EXTENSION: &str = "html";

/// The directories and files making up a project.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub config_file: PathBuf,
    pub content_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub build_dir: PathBuf,
}

impl ProjectLayout {
    /// Resolve the standard layout under a project directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            config_file: root.join("config.yml"),
            content_dir: root.join("content"),
            templates_dir: root.join("templates"),
            build_dir: root.join("build"),
        }
    }
}

/// Returns true if the file should be rendered as a markdown document.
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == MARKDOWN_EXTENSION)
}

/// Convert a content-relative path to its build-relative output path.
///
/// # Examples
/// ```ignore
/// output_path("blog/post.md") => "blog/post.html"
/// output_path("images/logo.png") => "images/logo.png"
/// ```
pub fn output_path(source_path: &Path) -> PathBuf {
    if is_markdown(source_path) {
        source_path.with_extension(HTML_EXTENSION)
    } else {
        source_path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let layout = ProjectLayout::new("/srv/site");
        assert_eq!(layout.config_file, Path::new("/srv/site/config.yml"));
        assert_eq!(layout.content_dir, Path::new("/srv/site/content"));
        assert_eq!(layout.templates_dir, Path::new("/srv/site/templates"));
        assert_eq!(layout.build_dir, Path::new("/srv/site/build"));
    }

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown(Path::new("index.md")));
        assert!(is_markdown(Path::new("blog/2024/post.md")));
        assert!(!is_markdown(Path::new("notes.cmd")));
        assert!(!is_markdown(Path::new("md")));
        assert!(!is_markdown(Path::new("style.css")));
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path(Path::new("a.md")), Path::new("a.html"));
        assert_eq!(
            output_path(Path::new("blog/post.md")),
            Path::new("blog/post.html")
        );
        assert_eq!(
            output_path(Path::new("images/logo.png")),
            Path::new("images/logo.png")
        );
        assert_eq!(output_path(Path::new("robots.txt")), Path::new("robots.txt"));
    }
}
