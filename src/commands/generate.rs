use crate::{
    build::{Builder, ProjectLayout},
    diagnostics::Diagnostics,
};

pub fn run(layout: ProjectLayout) -> Result<(), anyhow::Error> {
    let mut diagnostics = Diagnostics::new();

    let builder = Builder::load(layout)?;
    let result = builder.build(&mut diagnostics)?;

    tracing::info!(
        "Built site to {} ({} documents, {} static files, {} warnings)",
        result.output_dir.display(),
        result.documents,
        result.static_files,
        diagnostics.warnings().len()
    );

    Ok(())
}
