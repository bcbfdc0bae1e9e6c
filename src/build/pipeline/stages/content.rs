//! Content substitution stage.
//!
//! Evaluates `{{ ... }}` expressions inside the rendered HTML so authors can
//! reference project variables from markdown.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that substitutes variables in `doc.content`.
///
/// Runs after markdown rendering: it operates on HTML, not on the raw
/// markdown. Content only sees `var`, the project variables with this
/// document's title.
pub struct ContentStage;

impl Stage for ContentStage {
    fn name(&self) -> &'static str {
        "content"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        let vars = ctx.variables.overlay(&doc.title);
        let processed = ctx
            .renderer
            .render_content(doc.source_path(), &doc.content, &vars)?;
        doc.content = processed;
        Ok(())
    }
}
