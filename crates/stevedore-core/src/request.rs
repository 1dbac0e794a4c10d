use crate::error::{Error, Result};
use crate::version::ReleaseVersion;

/// The three actions stevedore can perform. Exactly one runs per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseCommand {
    Release,
    Publish,
    Deploy,
}

/// A validated invocation, built once from the CLI arguments and immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct ReleaseRequest {
    pub command: ReleaseCommand,
    pub environment: String,
    pub version: Option<ReleaseVersion>,
}

impl ReleaseRequest {
    pub fn new(
        command: ReleaseCommand,
        environment: String,
        version: Option<&str>,
    ) -> Result<Self> {
        if environment.is_empty() {
            return Err(Error::MissingEnvironment);
        }

        let version = version.map(str::parse).transpose()?;

        Ok(Self {
            command,
            environment,
            version,
        })
    }

    /// The floating image tag pushed on every release/publish: `latest`
    /// for the dev environment, otherwise the environment name itself.
    pub fn docker_tag(&self) -> &str {
        if self.environment == "dev" {
            "latest"
        } else {
            &self.environment
        }
    }
}
