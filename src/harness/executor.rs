//! Runner process boundary
//!
//! The harness never spawns processes itself; it goes through [`TestExecutor`] so that the parsing and outcome
//! logic can be driven by canned output in tests.

use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;

use super::config::HarnessConfig;

/// Errors that stop a run before its output could be parsed.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Test run timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("I/O error while waiting for the runner: {0}")]
    Io(#[from] std::io::Error),
}

/// Captured output of a finished runner process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    /// stdout followed by stderr
    pub output: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Launch a runner against one test file and capture its output.
pub trait TestExecutor {
    /// Run `test_file` (already absolute) with the configured runner.
    fn execute(
        &self,
        config: &HarnessConfig,
        test_file: &Path,
    ) -> impl Future<Output = Result<RunOutput, HarnessError>> + Send;
}

/// Spawns the runner with `tokio::process` (default executor).
///
/// The child is killed if the run future is dropped or the timeout elapses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl TestExecutor for ProcessExecutor {
    async fn execute(&self, config: &HarnessConfig, test_file: &Path) -> Result<RunOutput, HarnessError> {
        let mut cmd = Command::new(&config.program);
        cmd.args(&config.args)
            .arg(test_file)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &config.working_dir {
            cmd.current_dir(dir);
        }

        let child = cmd.spawn().map_err(|source| HarnessError::Spawn {
            program: config.program.clone(),
            source,
        })?;
        tracing::debug!(target: "learn::harness", pid = ?child.id(), program = %config.program, "spawned runner");

        let output = match config.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| HarnessError::Timeout(limit))??,
            None => child.wait_with_output().await?,
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        Ok(RunOutput {
            exit_code: output.status.code(),
            output: format!("{stdout}\n{stderr}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message() {
        let err = HarnessError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "Test run timed out after 30s");
    }

    #[test]
    fn test_spawn_message_names_program() {
        let err = HarnessError::Spawn {
            program: "npx".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert!(err.to_string().starts_with("failed to spawn `npx`"));
    }

    #[test]
    fn test_signal_exit_is_not_success() {
        let out = RunOutput {
            exit_code: None,
            output: String::new(),
        };
        assert!(!out.success());
    }
}
