use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod build;
mod commands;
mod config;
mod diagnostics;
mod logging;
mod sync;

use build::ProjectLayout;
use logging::LogLevel;

/// Generate a static site from a directory of markdown files.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    loglevel: LogLevel,

    /// Also append logs to this file
    #[arg(long)]
    logfile: Option<PathBuf>,

    /// Path to the project folder, containing config.yml, content/ and templates/
    projectdir: PathBuf,

    /// The command to execute
    #[command(subcommand)]
    command: SiteCommand,
}

#[derive(Parser)]
struct SyncArgs {
    /// The environment in config.yml to sync to
    environment: String,
}

#[derive(Subcommand)]
enum SiteCommand {
    /// Generate the site
    #[command(alias = "gen")]
    Generate,

    /// Sync the build folder to an environment
    Sync(SyncArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.loglevel, args.logfile.as_deref()) {
        eprintln!("failed to open log file: {e}");
        return ExitCode::FAILURE;
    }

    let layout = ProjectLayout::new(args.projectdir);

    let result = match args.command {
        SiteCommand::Generate => commands::generate::run(layout),
        SiteCommand::Sync(sync) => commands::sync::run(layout, &sync.environment).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_alias() {
        let args = Args::try_parse_from(["sitegen", "site", "gen"]).unwrap();
        assert!(matches!(args.command, SiteCommand::Generate));
        assert_eq!(args.projectdir, PathBuf::from("site"));
        assert_eq!(args.loglevel, LogLevel::Info);
    }

    #[test]
    fn test_parse_sync_with_logging() {
        let args = Args::try_parse_from([
            "sitegen",
            "--loglevel",
            "debug",
            "--logfile",
            "out.log",
            "site",
            "sync",
            "prod",
        ])
        .unwrap();
        assert_eq!(args.loglevel, LogLevel::Debug);
        assert_eq!(args.logfile, Some(PathBuf::from("out.log")));
        assert!(matches!(args.command, SiteCommand::Sync(ref s) if s.environment == "prod"));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["sitegen", "site"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_level() {
        assert!(Args::try_parse_from(["sitegen", "--loglevel", "loud", "site", "gen"]).is_err());
    }
}
