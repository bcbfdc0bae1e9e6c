//! File writing stage.
//!
//! Writes the final HTML output to the build directory.

use crate::build::paths::output_path;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that writes rendered documents to the output directory.
///
/// The document's directory must already exist in the output tree; the
/// builder creates every directory before any document is processed.
pub struct WriteStage;

impl Stage for WriteStage {
    fn name(&self) -> &'static str {
        "write"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        // Get the final HTML output
        let html = doc.output_html.as_ref().ok_or_else(|| {
            PipelineError::stage(
                "write",
                format!(
                    "document '{}' has no output HTML (was page stage run?)",
                    doc.source_path().display()
                ),
            )
        })?;

        let path = ctx.output_dir.join(output_path(doc.source_path()));
        std::fs::write(&path, html).map_err(|source| PipelineError::Write { path, source })?;

        Ok(())
    }
}
