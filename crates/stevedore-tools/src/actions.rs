use std::path::Path;

use stevedore_core::{
    EnvironmentConfig, ProjectConfig, ReleaseRequest, StageError, StagedDeployFiles,
};

use crate::docker::DockerClient;
use crate::eb::EbClient;
use crate::executor::{ExecError, ToolExecutor};
use crate::git::GitClient;

// ── Release ──

/// Tag the locally built image and, when a version is given, cut the
/// release tag and branch. Local-only: nothing is pushed here.
pub async fn run_release<E: ToolExecutor>(
    git: &GitClient<E>,
    docker: &DockerClient<E>,
    request: &ReleaseRequest,
    env: &EnvironmentConfig,
    project: &ProjectConfig,
) -> Result<(), ReleaseError> {
    if !docker.image_exists(&project.base_image).await? {
        return Err(ReleaseError::ImageNotFound {
            image: project.base_image.clone(),
        });
    }

    // Refresh-only step: a stale remote view must not abort the release.
    if let Err(e) = git.fetch_prune().await {
        tracing::warn!("git fetch --prune failed, continuing with stale refs: {e}");
    }

    let floating = format!("{}:{}", env.docker_repo_path, request.docker_tag());
    docker.tag(&project.base_image, &floating).await?;
    tracing::info!("tagged {floating}");

    if let Some(version) = &request.version {
        let branch = version.release_branch();

        if version.is_hotfix() {
            if !git.remote_branch_exists(&branch).await? {
                return Err(ReleaseError::ReleaseBranchNotFound { branch });
            }
            git.checkout(&branch).await?;
        } else {
            git.checkout_force(&project.trunk_branch).await?;
        }

        let versioned = format!("{}:{version}", env.docker_repo_path);
        docker.tag(&project.base_image, &versioned).await?;
        tracing::info!("tagged {versioned}");

        let last_tag = git.latest_tag().await?;
        let subjects = git.subjects_since(last_tag.as_deref()).await?;
        let message = subjects
            .iter()
            .map(|subject| format!("* {subject}"))
            .collect::<Vec<_>>()
            .join("\n");
        git.create_annotated_tag(&version.tag_name(), &message).await?;
        tracing::info!("created tag {}", version.tag_name());

        if !version.is_hotfix() {
            git.create_branch(&branch).await?;
            tracing::info!("created branch {branch}");
        }
    }

    Ok(())
}

// ── Publish ──

/// Push the floating tag and, when a version is given, the versioned tag
/// and the release branch with its tags.
pub async fn run_publish<E: ToolExecutor>(
    git: &GitClient<E>,
    docker: &DockerClient<E>,
    request: &ReleaseRequest,
    env: &EnvironmentConfig,
) -> Result<(), PublishError> {
    if !docker.image_exists(&env.docker_repo_path).await? {
        return Err(PublishError::ImageNotFound {
            image: env.docker_repo_path.clone(),
        });
    }

    docker
        .push(&format!("{}:{}", env.docker_repo_path, request.docker_tag()))
        .await?;

    if let Some(version) = &request.version {
        docker
            .push(&format!("{}:{version}", env.docker_repo_path))
            .await?;
        git.push_branch_with_tags(&version.release_branch()).await?;
    }

    Ok(())
}

// ── Deploy ──

/// Deploy the current application version to the environment. Staged
/// descriptor files are removed whatever the deploy call does.
pub async fn run_deploy<E: ToolExecutor>(
    eb: &EbClient<E>,
    env: &EnvironmentConfig,
    environment_dir: &Path,
    work_dir: &Path,
) -> Result<(), DeployError> {
    if !eb.is_ready(&env.aws_environment).await? {
        return Err(DeployError::EnvironmentNotReady {
            environment: env.aws_environment.clone(),
        });
    }

    eb.select_environment(&env.aws_environment).await?;

    let _staged = StagedDeployFiles::stage(environment_dir, work_dir)?;
    eb.deploy().await?;

    Ok(())
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    #[error("no local image named '{image}' — build it first: docker build -t {image} .")]
    ImageNotFound { image: String },

    #[error(
        "release branch '{branch}' not found on the remote — a hotfix needs an existing release line"
    )]
    ReleaseBranchNotFound { branch: String },

    #[error("release step failed")]
    Exec {
        #[from]
        source: ExecError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("no local image named '{image}' — run `stevedore release` first")]
    ImageNotFound { image: String },

    #[error("publish step failed")]
    Exec {
        #[from]
        source: ExecError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("environment '{environment}' is not ready — check `eb status {environment}`")]
    EnvironmentNotReady { environment: String },

    #[error("failed to stage deploy files")]
    Stage {
        #[from]
        source: StageError,
    },

    #[error("deploy step failed")]
    Exec {
        #[from]
        source: ExecError,
    },
}
