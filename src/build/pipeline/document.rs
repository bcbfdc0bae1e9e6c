//! Document types for pipeline processing.

use std::path::Path;

use crate::build::document::ContentDocument;
use crate::build::template::TemplateRef;

/// A document being processed through the pipeline.
///
/// Wraps the parsed `ContentDocument` with mutable state that evolves
/// through pipeline stages:
///
/// 1. Initially: `content` empty, `title` empty, `template` unset
/// 2. After markdown: `content` = HTML rendered from the markdown body
/// 3. After title: `title` resolved
/// 4. After template: `template` chosen
/// 5. After content: `content` = HTML with variables substituted
/// 6. After page: `output_html` = final page HTML
#[derive(Debug)]
pub struct ProcessingDocument {
    /// The parsed source document
    pub doc: ContentDocument,

    /// Content being processed.
    pub content: String,

    /// Display title, available to templates as `var.title`
    pub title: String,

    /// Template the page stage wraps the content in.
    pub template: Option<TemplateRef>,

    /// Final HTML output after page rendering.
    pub output_html: Option<String>,
}

impl ProcessingDocument {
    pub fn new(doc: ContentDocument) -> Self {
        Self {
            doc,
            content: String::new(),
            title: String::new(),
            template: None,
            output_html: None,
        }
    }

    /// Path relative to the content root.
    pub fn source_path(&self) -> &Path {
        &self.doc.source_path
    }
}
