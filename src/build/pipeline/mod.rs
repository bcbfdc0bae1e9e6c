//! Build pipeline for document processing.
//!
//! The pipeline transforms one markdown document through a series of stages:
//! 1. Markdown rendering (body to HTML)
//! 2. Title resolution
//! 3. Template selection
//! 4. Content substitution (variables in the rendered HTML)
//! 5. Page rendering (page template wrapper)
//! 6. File writing (output to disk)
//!
//! Stage order matters: the page stage consumes the content stage's output,
//! never the raw markdown.

mod context;
mod document;
mod error;
mod stages;

pub use context::PipelineContext;
pub use document::ProcessingDocument;
pub use error::PipelineError;

use stages::{ContentStage, MarkdownStage, PageStage, TemplateStage, TitleStage, WriteStage};

/// A stage in the document processing pipeline.
///
/// Stages transform a document in place before passing it to the next stage.
pub trait Stage: Send + Sync {
    /// Unique name for this stage.
    fn name(&self) -> &'static str;

    /// Process a document through this stage.
    ///
    /// The `ctx` provides access to shared resources like the renderer and
    /// the diagnostics handle.
    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError>;
}

/// The document processing pipeline.
///
/// The default pipeline is: markdown → title → template → content → page → write.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the default pipeline with standard stages.
    pub fn default_pipeline() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(MarkdownStage);
        pipeline.add_stage(TitleStage);
        pipeline.add_stage(TemplateStage);
        pipeline.add_stage(ContentStage);
        pipeline.add_stage(PageStage);
        pipeline.add_stage(WriteStage);
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Run every stage on a document, stopping at the first error.
    pub fn run(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for stage in &self.stages {
            stage.process(doc, ctx)?;
        }
        Ok(())
    }

    /// Get the names of all stages in order.
    #[allow(dead_code)]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::default_pipeline()
    }
}
