use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to read environment file {path}")]
    EnvFile {
        path: PathBuf,
        source: dotenvy::Error,
    },

    #[error(
        "AWS_ENVIRONMENT_NAME is not set for environment '{environment}' — add it to {path}"
    )]
    MissingAwsEnvironmentName { environment: String, path: PathBuf },

    #[error(
        "DOCKER_HUB_REPO_PATH is not set for environment '{environment}' — add it to {path}"
    )]
    MissingDockerRepoPath { environment: String, path: PathBuf },

    #[error("environment name must not be empty")]
    MissingEnvironment,

    #[error("invalid version '{input}' — expected major.minor.patch, e.g. 1.2.3")]
    InvalidVersion { input: String },
}
