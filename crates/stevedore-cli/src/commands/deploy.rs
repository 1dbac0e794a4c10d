use std::path::Path;

use stevedore_core::{EnvironmentConfig, ReleaseRequest};
use stevedore_tools::{EbClient, run_deploy};

/// Deploy the published version to the Elastic Beanstalk environment.
pub async fn deploy(
    request: &ReleaseRequest,
    env: &EnvironmentConfig,
    environments_dir: &Path,
    work_dir: &Path,
) -> anyhow::Result<()> {
    let environment_dir = environments_dir.join(&request.environment);

    println!("Deploying to '{}'...", env.aws_environment);

    run_deploy(&EbClient::new(), env, &environment_dir, work_dir).await?;

    println!("Deployed: {}", env.aws_environment);
    Ok(())
}
