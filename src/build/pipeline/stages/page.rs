//! Page template rendering stage.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that applies the chosen page template to substituted content.
///
/// The template sees `content` (output of the content stage) and `var`.
/// After this stage, `doc.output_html` contains the complete HTML page.
pub struct PageStage;

impl Stage for PageStage {
    fn name(&self) -> &'static str {
        "page"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        let template = doc.template.as_ref().ok_or_else(|| {
            PipelineError::stage(
                "page",
                format!(
                    "document '{}' has no template (was template stage run?)",
                    doc.source_path().display()
                ),
            )
        })?;

        let vars = ctx.variables.overlay(&doc.title);
        tracing::debug!(
            "rendering {} with {} as \"{}\"",
            doc.source_path().display(),
            template.name(),
            vars.title()
        );
        let html =
            ctx.renderer
                .render_page(doc.source_path(), template.name(), &doc.content, &vars)?;

        doc.output_html = Some(html);
        Ok(())
    }
}
