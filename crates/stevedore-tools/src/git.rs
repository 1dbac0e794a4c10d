use crate::executor::{ExecError, RealExecutor, ToolExecutor, args};

const PROGRAM: &str = "git";

/// git operations client, parameterized over the executor for testability.
pub struct GitClient<E: ToolExecutor = RealExecutor> {
    executor: E,
}

impl GitClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for GitClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ToolExecutor> GitClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Refresh remote refs, dropping branches deleted on the remote.
    pub async fn fetch_prune(&self) -> Result<(), ExecError> {
        self.executor
            .exec(PROGRAM, &args(["fetch", "--prune"]))
            .await?;
        Ok(())
    }

    /// Whether `origin/{branch}` appears among the remote-tracking branches.
    pub async fn remote_branch_exists(&self, branch: &str) -> Result<bool, ExecError> {
        let output = self
            .executor
            .exec(
                PROGRAM,
                &args(["branch", "-r", "--format", "%(refname:short)"]),
            )
            .await?;

        let wanted = format!("origin/{branch}");
        Ok(output.lines().any(|line| line.trim() == wanted))
    }

    pub async fn checkout(&self, branch: &str) -> Result<(), ExecError> {
        self.executor
            .exec(PROGRAM, &args(["checkout", branch]))
            .await?;
        Ok(())
    }

    /// Checkout discarding local modifications.
    pub async fn checkout_force(&self, branch: &str) -> Result<(), ExecError> {
        self.executor
            .exec(PROGRAM, &args(["checkout", "-f", branch]))
            .await?;
        Ok(())
    }

    /// Create `branch` at HEAD and switch to it.
    pub async fn create_branch(&self, branch: &str) -> Result<(), ExecError> {
        self.executor
            .exec(PROGRAM, &args(["checkout", "-b", branch]))
            .await?;
        Ok(())
    }

    /// The most recent tag reachable from HEAD, or `None` when the
    /// repository has no tags yet.
    pub async fn latest_tag(&self) -> Result<Option<String>, ExecError> {
        match self
            .executor
            .exec(PROGRAM, &args(["describe", "--tags", "--abbrev=0"]))
            .await
        {
            Ok(output) => {
                let tag = output.trim();
                Ok((!tag.is_empty()).then(|| tag.to_owned()))
            }
            // describe exits non-zero when no tag exists; that is a normal
            // first-release state, not a failure.
            Err(ExecError::CommandFailed { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Commit subjects with their authors, newest first, since `since_tag`
    /// (or the whole history when `None`).
    pub async fn subjects_since(&self, since_tag: Option<&str>) -> Result<Vec<String>, ExecError> {
        let mut cmd = args(["log", "--pretty=format:%s (%an)"]);
        if let Some(tag) = since_tag {
            cmd.push(format!("{tag}..HEAD"));
        }

        let output = self.executor.exec(PROGRAM, &cmd).await?;
        Ok(output
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect())
    }

    /// Create annotated tag `name` at HEAD with the given message body.
    pub async fn create_annotated_tag(&self, name: &str, message: &str) -> Result<(), ExecError> {
        self.executor
            .exec(PROGRAM, &args(["tag", "-a", name, "-m", message]))
            .await?;
        Ok(())
    }

    /// Push `branch` to origin with its tags, setting the upstream.
    pub async fn push_branch_with_tags(&self, branch: &str) -> Result<(), ExecError> {
        self.executor
            .exec_streaming(PROGRAM, &args(["push", "-u", "origin", branch, "--tags"]))
            .await
    }
}
