//! Title resolution stage.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};
use crate::build::title::resolve_title;

/// Stage that sets `doc.title` from front matter or the first heading.
pub struct TitleStage;

impl Stage for TitleStage {
    fn name(&self) -> &'static str {
        "title"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        _ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        doc.title = resolve_title(&doc.doc.front_matter, &doc.doc.raw);
        tracing::debug!(
            "title of {} is \"{}\"",
            doc.source_path().display(),
            doc.title
        );
        Ok(())
    }
}
