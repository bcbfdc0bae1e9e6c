//! Template selection stage.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};
use crate::build::template::resolve_template;

/// Stage that picks the page template for each document.
///
/// Never fails: an unusable template request is reported and the default
/// template is used instead.
pub struct TemplateStage;

impl Stage for TemplateStage {
    fn name(&self) -> &'static str {
        "template"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        let resolution = resolve_template(doc.source_path(), &doc.doc.front_matter, ctx.renderer);
        if let Some(warning) = resolution.warning {
            ctx.diagnostics.warn(warning);
        }
        doc.template = Some(resolution.template);
        Ok(())
    }
}
