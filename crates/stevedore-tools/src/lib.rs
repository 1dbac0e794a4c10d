//! External-tool clients and action sequences for stevedore.
//!
//! Every git/docker/eb invocation goes through the [`ToolExecutor`] seam;
//! production code uses [`RealExecutor`], tests use mockall-generated mocks.

pub mod actions;
pub mod docker;
pub mod eb;
pub mod executor;
pub mod git;

pub use actions::{DeployError, PublishError, ReleaseError, run_deploy, run_publish, run_release};
pub use docker::DockerClient;
pub use eb::EbClient;
pub use executor::{ExecError, RealExecutor, ToolExecutor};
pub use git::GitClient;
