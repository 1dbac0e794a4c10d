use stevedore_core::{EnvironmentConfig, ProjectConfig, ReleaseRequest};
use stevedore_tools::{DockerClient, GitClient, run_release};

/// Tag the locally built image and cut the release tag/branch.
pub async fn release(
    request: &ReleaseRequest,
    env: &EnvironmentConfig,
    project: &ProjectConfig,
) -> anyhow::Result<()> {
    println!(
        "Releasing '{}' as {}:{}...",
        project.base_image,
        env.docker_repo_path,
        request.docker_tag()
    );

    run_release(
        &GitClient::new(),
        &DockerClient::new(),
        request,
        env,
        project,
    )
    .await?;

    match &request.version {
        Some(version) => println!(
            "Release {version} ready — push it with: stevedore publish {} {version}",
            request.environment
        ),
        None => println!(
            "Release ready — push it with: stevedore publish {}",
            request.environment
        ),
    }
    Ok(())
}
