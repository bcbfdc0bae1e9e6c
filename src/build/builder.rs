use std::path::PathBuf;

use crate::config::{ConfigError, ProjectConfig};
use crate::diagnostics::Diagnostics;

use super::document::ContentDocument;
use super::markdown::parser_options;
use super::paths::{ProjectLayout, output_path};
use super::pipeline::{Pipeline, PipelineContext, PipelineError, ProcessingDocument};
use super::render::Renderer;
use super::variables::ProjectVariables;
use super::walk::{ContentItem, ContentTree, WalkError};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("content error: {0}")]
    Walk(#[from] WalkError),

    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    #[error("failed to remove previous build {path}: {source}")]
    Clean {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug)]
pub struct BuildResult {
    pub output_dir: PathBuf,
    pub documents: usize,
    pub static_files: usize,
}

/// Owns a generate run from a loaded config to a finished build tree.
pub struct Builder {
    config: ProjectConfig,
    layout: ProjectLayout,
}

impl Builder {
    pub fn new(config: ProjectConfig, layout: ProjectLayout) -> Self {
        Self { config, layout }
    }

    /// Load the project's config and prepare a builder for it.
    pub fn load(layout: ProjectLayout) -> Result<Self, BuildError> {
        let config = ProjectConfig::load_from_file(&layout.config_file)?;
        Ok(Self::new(config, layout))
    }

    /// Regenerate the whole build tree.
    ///
    /// The first error stops the run. Output written before it stays on disk.
    pub fn build(&self, diagnostics: &mut Diagnostics) -> Result<BuildResult, BuildError> {
        // Build pipeline:
        // 1. Load templates and check the project layout
        // 2. Remove the previous build tree
        // 3. Discover content -> ContentTree
        // 4. Create every output directory
        // 5. Render documents and copy static files

        // Step 1: Everything that can be validated up front is, so a broken
        // project never costs the previous build
        let renderer = Renderer::new(&self.layout.templates_dir)?;
        if !self.layout.content_dir.is_dir() {
            return Err(ConfigError::ContentNotFound(self.layout.content_dir.clone()).into());
        }
        let markdown_options = parser_options(&self.config.markdown).map_err(ConfigError::from)?;
        let variables = ProjectVariables::new(self.config.var.clone());

        // Step 2: Full wipe
        let output_dir = &self.layout.build_dir;
        if output_dir.exists() {
            tracing::debug!("removing previous build {}", output_dir.display());
            std::fs::remove_dir_all(output_dir).map_err(|source| BuildError::Clean {
                path: output_dir.clone(),
                source,
            })?;
        }

        // Step 3: Discover content
        let tree = ContentTree::scan(&self.layout.content_dir)?;
        let documents = tree.document_count();
        let static_files = tree.items.len() - documents;
        tracing::info!(
            "found {} document(s) and {} static file(s) in {}",
            documents,
            static_files,
            self.layout.content_dir.display()
        );

        // Step 4: Directories, parents first
        create_dir(output_dir, true)?;
        for dir in &tree.dirs {
            create_dir(&output_dir.join(dir), false)?;
        }

        // Step 5: Files
        let pipeline = Pipeline::default_pipeline();
        let mut ctx = PipelineContext::new(
            output_dir,
            &variables,
            markdown_options,
            &renderer,
            diagnostics,
        );

        for item in &tree.items {
            let input_path = self.layout.content_dir.join(item.source_path());
            match item {
                ContentItem::Document(source_path) => {
                    tracing::debug!("rendering {}", input_path.display());
                    let raw = std::fs::read_to_string(&input_path).map_err(|source| {
                        BuildError::Read {
                            path: input_path.clone(),
                            source,
                        }
                    })?;
                    let mut doc =
                        ProcessingDocument::new(ContentDocument::parse(source_path.clone(), raw));
                    pipeline.run(&mut doc, &mut ctx)?;
                }
                ContentItem::Static(source_path) => {
                    let target = output_dir.join(output_path(source_path));
                    tracing::debug!("copying {}", input_path.display());
                    std::fs::copy(&input_path, &target).map_err(|source| BuildError::Copy {
                        from: input_path.clone(),
                        to: target.clone(),
                        source,
                    })?;
                }
            }
        }

        Ok(BuildResult {
            output_dir: output_dir.clone(),
            documents,
            static_files,
        })
    }
}

fn create_dir(path: &std::path::Path, with_parents: bool) -> Result<(), BuildError> {
    let result = if with_parents {
        std::fs::create_dir_all(path)
    } else {
        std::fs::create_dir(path)
    };
    result.map_err(|source| BuildError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
