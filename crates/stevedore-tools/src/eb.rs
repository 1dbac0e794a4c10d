use crate::executor::{ExecError, RealExecutor, ToolExecutor, args};

const PROGRAM: &str = "eb";

/// Elastic Beanstalk CLI client, parameterized over the executor for
/// testability.
pub struct EbClient<E: ToolExecutor = RealExecutor> {
    executor: E,
}

impl EbClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for EbClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ToolExecutor> EbClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Whether the environment exists and reports `Status: Ready`.
    ///
    /// A failing status query means the environment is missing or otherwise
    /// unusable, which for deployment purposes is the same as not ready.
    pub async fn is_ready(&self, environment: &str) -> Result<bool, ExecError> {
        match self
            .executor
            .exec(PROGRAM, &args(["status", environment]))
            .await
        {
            Ok(output) => Ok(status_line(&output).is_some_and(|status| status == "Ready")),
            Err(ExecError::CommandFailed { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Make `environment` the default target for subsequent eb commands.
    pub async fn select_environment(&self, environment: &str) -> Result<(), ExecError> {
        self.executor
            .exec(PROGRAM, &args(["use", environment]))
            .await?;
        Ok(())
    }

    /// Deploy the staged application version, streaming event output.
    pub async fn deploy(&self) -> Result<(), ExecError> {
        self.executor.exec_streaming(PROGRAM, &args(["deploy"])).await
    }
}

fn status_line(output: &str) -> Option<&str> {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix("Status:"))
        .map(str::trim)
}
