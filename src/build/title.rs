//! Document title resolution.

use super::document::FrontMatter;

/// Determine a document's display title.
///
/// A `title` front matter key always wins. Otherwise the first top-level
/// heading line (`# Text`) in the raw file text is used, marker stripped and
/// trimmed. The front matter block is part of that text. A document with
/// neither gets an empty title.
pub fn resolve_title(front_matter: &FrontMatter, raw: &str) -> String {
    front_matter
        .title()
        .or_else(|| first_heading(raw))
        .unwrap_or_default()
}

/// Text of the first line that is a level-one ATX heading.
fn first_heading(raw: &str) -> Option<String> {
    raw
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|text| text.trim().to_string())
}
