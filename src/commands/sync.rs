use crate::{
    build::ProjectLayout,
    config::{ConfigError, ProjectConfig},
    sync::SyncDeployer,
};

pub async fn run(layout: ProjectLayout, environment: &str) -> Result<(), anyhow::Error> {
    let config = ProjectConfig::load_from_file(&layout.config_file)?;

    let target = config
        .sync_target(environment)
        .ok_or_else(|| ConfigError::UnknownEnvironment(environment.to_string()))?;

    tracing::info!("Starting sync of {} to {}", layout.build_dir.display(), target.dest);
    SyncDeployer::new(layout.build_dir).deploy(&target.dest).await?;
    tracing::info!("Sync done.");

    Ok(())
}
