use stevedore_core::{EnvironmentConfig, ReleaseRequest};
use stevedore_tools::{DockerClient, GitClient, run_publish};

/// Push image tags and, for versioned releases, the release branch.
pub async fn publish(request: &ReleaseRequest, env: &EnvironmentConfig) -> anyhow::Result<()> {
    println!(
        "Publishing {}:{}...",
        env.docker_repo_path,
        request.docker_tag()
    );

    run_publish(&GitClient::new(), &DockerClient::new(), request, env).await?;

    println!("Published {}", env.docker_repo_path);
    Ok(())
}
