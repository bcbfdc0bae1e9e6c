//! Pipeline context for sharing state across stages.

use std::path::Path;

use pulldown_cmark::Options;

use crate::build::render::Renderer;
use crate::build::variables::ProjectVariables;
use crate::diagnostics::Diagnostics;

/// Shared context for pipeline stages.
///
/// Everything here is read-only for the run except the diagnostics handle.
pub struct PipelineContext<'a> {
    // === Output configuration ===
    /// Directory where output files are written
    pub output_dir: &'a Path,

    // === Project-level data ===
    /// Variables from the project config, overlaid per document
    pub variables: &'a ProjectVariables,

    /// Markdown parser options, validated from the config before the build starts
    pub markdown_options: Options,

    // === Services ===
    /// Template renderer
    pub renderer: &'a Renderer,

    /// Where recoverable problems are reported
    pub diagnostics: &'a mut Diagnostics,
}

impl<'a> PipelineContext<'a> {
    /// Create a new pipeline context.
    pub fn new(
        output_dir: &'a Path,
        variables: &'a ProjectVariables,
        markdown_options: Options,
        renderer: &'a Renderer,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        Self {
            output_dir,
            variables,
            markdown_options,
            renderer,
            diagnostics,
        }
    }
}
