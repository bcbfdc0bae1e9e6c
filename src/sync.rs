//! Mirroring the build tree to a remote destination with rsync.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use tokio::process::Command;

/// The external tool doing the transfer.
const SYNC_TOOL: &str = "rsync";

#[derive(thiserror::Error, Debug)]
pub enum SyncError {
    #[error("{tool} not found on PATH: {source}")]
    ToolNotFound {
        tool: &'static str,
        source: which::Error,
    },

    #[error("build directory {0} does not exist; run generate first")]
    BuildMissing(PathBuf),

    #[error("failed to start {tool}: {source}")]
    Spawn {
        tool: &'static str,
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}")]
    Failed {
        tool: &'static str,
        status: ExitStatus,
    },
}

/// Runs the sync tool against a finished build tree.
pub struct SyncDeployer {
    build_dir: PathBuf,
}

impl SyncDeployer {
    pub fn new(build_dir: PathBuf) -> Self {
        Self { build_dir }
    }

    /// Arguments for mirroring the build tree's contents into `dest`,
    /// deleting anything there that the build no longer has.
    fn args(&self, dest: &str) -> Vec<String> {
        vec![
            "-az".to_string(),
            "--delete".to_string(),
            // Trailing slash: copy the directory's contents, not the directory
            format!("{}/", self.build_dir.display()),
            dest.to_string(),
        ]
    }

    /// Sync to `dest`, waiting for the tool to exit.
    pub async fn deploy(&self, dest: &str) -> Result<(), SyncError> {
        if !self.build_dir.is_dir() {
            return Err(SyncError::BuildMissing(self.build_dir.clone()));
        }

        let tool = which::which(SYNC_TOOL).map_err(|source| SyncError::ToolNotFound {
            tool: SYNC_TOOL,
            source,
        })?;

        self.run(&tool, dest).await
    }

    async fn run(&self, tool: &Path, dest: &str) -> Result<(), SyncError> {
        let args = self.args(dest);
        tracing::debug!("running {} {}", tool.display(), args.join(" "));

        let status = Command::new(tool)
            .args(&args)
            .status()
            .await
            .map_err(|source| SyncError::Spawn {
                tool: SYNC_TOOL,
                source,
            })?;

        if !status.success() {
            return Err(SyncError::Failed {
                tool: SYNC_TOOL,
                status,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_mirror_directory_contents() {
        let deployer = SyncDeployer::new(PathBuf::from("/srv/site/build"));
        assert_eq!(
            deployer.args("host:/var/www"),
            vec!["-az", "--delete", "/srv/site/build/", "host:/var/www"]
        );
    }

    #[tokio::test]
    async fn test_missing_build_dir() {
        let dir = tempfile::tempdir().unwrap();
        let deployer = SyncDeployer::new(dir.path().join("build"));

        let result = deployer.deploy("host:/var/www").await;

        assert!(matches!(result, Err(SyncError::BuildMissing(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_tool_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let deployer = SyncDeployer::new(dir.path().to_path_buf());

        let result = deployer.run(Path::new("false"), "anywhere").await;

        assert!(matches!(result, Err(SyncError::Failed { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_tool() {
        let dir = tempfile::tempdir().unwrap();
        let deployer = SyncDeployer::new(dir.path().to_path_buf());

        deployer.run(Path::new("true"), "anywhere").await.unwrap();
    }
}
