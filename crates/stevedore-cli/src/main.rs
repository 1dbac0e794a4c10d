mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use stevedore_core::{EnvironmentConfig, ReleaseCommand, ReleaseRequest, StevedoreConfig};
use stevedore_tools::ExecError;

#[derive(Parser)]
#[command(
    name = "stevedore",
    about = "Release, publish, and deploy Docker images to Elastic Beanstalk"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tag the local image and cut the release tag and branch
    Release {
        /// Target environment name
        environment: String,
        /// Release version (major.minor.patch)
        version: Option<String>,
    },
    /// Push image tags and the release branch to their remotes
    Publish {
        /// Target environment name
        environment: String,
        /// Release version (major.minor.patch)
        version: Option<String>,
    },
    /// Deploy the published version to the Elastic Beanstalk environment
    Deploy {
        /// Target environment name
        environment: String,
        /// Release version (major.minor.patch)
        version: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and must exit 0; every
            // actual usage error exits 1.
            let _ = e.print();
            return match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            exit_code_for(&err)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let (command, environment, version) = match cli.command {
        Commands::Release {
            environment,
            version,
        } => (ReleaseCommand::Release, environment, version),
        Commands::Publish {
            environment,
            version,
        } => (ReleaseCommand::Publish, environment, version),
        Commands::Deploy {
            environment,
            version,
        } => (ReleaseCommand::Deploy, environment, version),
    };

    let request = ReleaseRequest::new(command, environment, version.as_deref())?;
    if let Some(version) = &request.version {
        println!(
            "Version {version} — release line {}{}",
            version.major_minor(),
            if version.is_hotfix() { " (hotfix)" } else { "" },
        );
    }

    let project_dir = PathBuf::from(".");
    let config = StevedoreConfig::load(&project_dir)?;
    let environments_dir = project_dir.join(&config.project.environments_dir);
    let env = EnvironmentConfig::load(&environments_dir, &request.environment)?;

    match request.command {
        ReleaseCommand::Release => commands::release(&request, &env, &config.project).await,
        ReleaseCommand::Publish => commands::publish(&request, &env).await,
        ReleaseCommand::Deploy => {
            commands::deploy(&request, &env, &environments_dir, &project_dir).await
        }
    }
}

/// The single point mapping failures to process exit codes: a propagated
/// tool failure exits with the child's code, everything else with 1.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ExecError>())
        .and_then(ExecError::exit_code)
        .and_then(|code| u8::try_from(code).ok())
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE)
}
