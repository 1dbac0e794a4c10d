use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// stevedore.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StevedoreConfig {
    #[serde(default)]
    pub project: ProjectConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Name of the locally built image that release tags from
    #[serde(default = "default_base_image")]
    pub base_image: String,
    /// Branch that non-hotfix releases are cut from
    #[serde(default = "default_trunk_branch")]
    pub trunk_branch: String,
    /// Directory holding per-environment config and deploy descriptors
    #[serde(default = "default_environments_dir")]
    pub environments_dir: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            base_image: default_base_image(),
            trunk_branch: default_trunk_branch(),
            environments_dir: default_environments_dir(),
        }
    }
}

impl StevedoreConfig {
    /// Load from stevedore.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join("stevedore.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).map_err(|e| Error::ConfigLoad {
                path: config_path.clone(),
                source: e,
            })?;
            toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

/// Per-environment settings, sourced from `environments/{name}/.env`.
///
/// Both values are required; an absent or empty value is a fatal
/// configuration error reported before any tool runs.
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub docker_repo_path: String,
    pub aws_environment: String,
}

const AWS_ENVIRONMENT_KEY: &str = "AWS_ENVIRONMENT_NAME";
const DOCKER_REPO_KEY: &str = "DOCKER_HUB_REPO_PATH";

impl EnvironmentConfig {
    pub fn load(environments_dir: &Path, environment: &str) -> Result<Self> {
        let env_path = environments_dir.join(environment).join(".env");
        let vars = read_env_file(&env_path)?;

        let aws_environment = required(&vars, AWS_ENVIRONMENT_KEY).ok_or_else(|| {
            Error::MissingAwsEnvironmentName {
                environment: environment.to_owned(),
                path: env_path.clone(),
            }
        })?;

        let docker_repo_path = required(&vars, DOCKER_REPO_KEY).ok_or_else(|| {
            Error::MissingDockerRepoPath {
                environment: environment.to_owned(),
                path: env_path.clone(),
            }
        })?;

        Ok(Self {
            docker_repo_path,
            aws_environment,
        })
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| Error::EnvFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| Error::EnvFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        vars.insert(key, value);
    }
    Ok(vars)
}

fn required(vars: &HashMap<String, String>, key: &str) -> Option<String> {
    vars.get(key)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn default_base_image() -> String {
    "app".to_owned()
}

fn default_trunk_branch() -> String {
    "main".to_owned()
}

fn default_environments_dir() -> String {
    "environments".to_owned()
}
