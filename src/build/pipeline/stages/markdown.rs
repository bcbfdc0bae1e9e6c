//! Markdown rendering stage.
//!
//! Renders the document's markdown body (front matter already removed)
//! to an HTML fragment.

use crate::build::markdown::render_markdown;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};
use crate::diagnostics::Diagnostic;

/// Stage that renders the markdown body to HTML.
///
/// A front matter block that had to be discarded is reported here, once
/// per document. After this stage, `doc.content` contains HTML.
/// Extension names were validated before the build began, so this stage
/// cannot fail.
pub struct MarkdownStage;

impl Stage for MarkdownStage {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        tracing::debug!(
            "rendering markdown of {} ({} bytes)",
            doc.source_path().display(),
            doc.doc.raw.len()
        );

        if let Some(reason) = &doc.doc.front_matter_error {
            ctx.diagnostics.warn(Diagnostic::InvalidFrontMatter {
                document: doc.doc.source_path.clone(),
                reason: reason.clone(),
            });
        }

        doc.content = render_markdown(&doc.doc.body, ctx.markdown_options);

        Ok(())
    }
}
