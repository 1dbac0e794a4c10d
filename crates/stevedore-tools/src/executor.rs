/// Abstraction over external-tool execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
/// Unlike a single-tool wrapper, the program name is a parameter: the same
/// seam serves `git`, `docker`, and `eb`.
#[allow(async_fn_in_trait)]
pub trait ToolExecutor: Send + Sync {
    /// Execute a command and capture stdout.
    async fn exec(&self, program: &str, args: &[String]) -> Result<String, ExecError>;

    /// Execute a command, streaming output to the terminal.
    async fn exec_streaming(&self, program: &str, args: &[String]) -> Result<(), ExecError>;
}

/// Real subprocess executor.
pub struct RealExecutor;

impl ToolExecutor for RealExecutor {
    async fn exec(&self, program: &str, args: &[String]) -> Result<String, ExecError> {
        use std::process::Stdio;

        tracing::debug!(?args, "exec {program}");
        let output = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ExecError::NotFound {
                program: program.to_owned(),
                source: e,
            })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| ExecError::InvalidUtf8 {
                program: program.to_owned(),
                source: e,
            })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            Err(ExecError::CommandFailed {
                program: program.to_owned(),
                args: args.to_vec(),
                code: output.status.code(),
                stderr,
            })
        }
    }

    async fn exec_streaming(&self, program: &str, args: &[String]) -> Result<(), ExecError> {
        use std::process::Stdio;

        tracing::debug!(?args, "exec {program} (streaming)");
        let status = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| ExecError::NotFound {
                program: program.to_owned(),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ExecError::CommandFailed {
                program: program.to_owned(),
                args: args.to_vec(),
                code: status.code(),
                stderr: format!("exit code: {status}"),
            })
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("{program} not found on PATH — is it installed?")]
    NotFound {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} {args:?} failed\n{stderr}")]
    CommandFailed {
        program: String,
        args: Vec<String>,
        code: Option<i32>,
        stderr: String,
    },

    #[error("{program} output was not valid UTF-8")]
    InvalidUtf8 {
        program: String,
        source: std::string::FromUtf8Error,
    },
}

impl ExecError {
    /// Exit code of the failed child, when it exited (as opposed to being
    /// signalled or never starting). Deploy and publish propagate this as
    /// the process exit code.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecError::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }
}

pub(crate) fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}
