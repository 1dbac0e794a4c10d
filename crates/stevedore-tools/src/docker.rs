use crate::executor::{ExecError, RealExecutor, ToolExecutor, args};

const PROGRAM: &str = "docker";

/// docker operations client, parameterized over the executor for testability.
pub struct DockerClient<E: ToolExecutor = RealExecutor> {
    executor: E,
}

impl DockerClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for DockerClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ToolExecutor> DockerClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Whether a local image exists under the given repository name.
    pub async fn image_exists(&self, repository: &str) -> Result<bool, ExecError> {
        let output = self
            .executor
            .exec(PROGRAM, &args(["images", "-q", repository]))
            .await?;
        Ok(!output.trim().is_empty())
    }

    /// Apply `target` as an additional name for `source`.
    pub async fn tag(&self, source: &str, target: &str) -> Result<(), ExecError> {
        self.executor
            .exec(PROGRAM, &args(["tag", source, target]))
            .await?;
        Ok(())
    }

    /// Push an image reference to its registry, streaming layer progress.
    pub async fn push(&self, image_ref: &str) -> Result<(), ExecError> {
        self.executor
            .exec_streaming(PROGRAM, &args(["push", image_ref]))
            .await
    }
}
