//! Test execution harness
//!
//! Runs an external test runner against one test file and turns its output into an [`ExecutionResult`]. Every
//! failure mode (missing file, spawn error, timeout, unreadable output) comes back as a failing result, never as
//! an error.
//!
//! ## Examples
//! ```rust,no_run
//! # async fn demo() {
//! let result = learn::harness::run_tests("topics/queues/stage-1/tests/solution.test.ts").await;
//! for test in result.failures() {
//!     eprintln!("{}: {}", test.name, test.error.as_deref().unwrap_or(""));
//! }
//! # }
//! ```

pub mod config;
pub mod executor;
pub mod parse;
pub mod report;
pub mod result;

use std::path::{Path, PathBuf};

pub use config::HarnessConfig;
pub use executor::{HarnessError, ProcessExecutor, RunOutput, TestExecutor};
pub use parse::parse_output;
pub use report::{ConsoleReporter, JsonReporter, TestReporter};
pub use result::{ExecutionResult, TestOutcome};

use result::{MISSING_FILE_NAME, SPAWN_FAILURE_NAME};

/// Runs test files with a configured runner.
#[derive(Debug, Clone)]
pub struct Harness<E = ProcessExecutor> {
    config: HarnessConfig,
    executor: E,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Self {
        Self::with_executor(config, ProcessExecutor)
    }
}

impl<E: TestExecutor> Harness<E> {
    pub fn with_executor(config: HarnessConfig, executor: E) -> Self {
        Self { config, executor }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Run one test file. Dropping the returned future kills the runner.
    #[tracing::instrument(skip_all, fields(test_file = %test_file.as_ref().display()))]
    pub async fn run(&self, test_file: impl AsRef<Path>) -> ExecutionResult {
        let abs = absolute(test_file.as_ref());

        if !tokio::fs::try_exists(&abs).await.unwrap_or(false) {
            tracing::warn!(path = %abs.display(), "test file does not exist");
            return ExecutionResult::failure(
                MISSING_FILE_NAME,
                format!("Test file does not exist: {}", abs.display()),
            );
        }

        match self.executor.execute(&self.config, &abs).await {
            Ok(run) => {
                tracing::debug!(exit_code = ?run.exit_code, "runner finished");
                parse_output(&run.output, run.success())
            }
            Err(err) => {
                tracing::warn!(error = %err, "test run did not complete");
                ExecutionResult::failure(SPAWN_FAILURE_NAME, err.to_string())
            }
        }
    }
}

/// Run one test file with the default runner in the current directory.
pub async fn run_tests(test_file: impl AsRef<Path>) -> ExecutionResult {
    Harness::new(HarnessConfig::default()).run(test_file).await
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Executor that replays canned output and records the paths it was asked to run.
    struct Canned {
        result: fn() -> Result<RunOutput, HarnessError>,
        seen: Mutex<Vec<PathBuf>>,
    }

    impl Canned {
        fn new(result: fn() -> Result<RunOutput, HarnessError>) -> Self {
            Self {
                result,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl TestExecutor for Canned {
        async fn execute(&self, _config: &HarnessConfig, test_file: &Path) -> Result<RunOutput, HarnessError> {
            self.seen.lock().unwrap().push(test_file.to_path_buf());
            (self.result)()
        }
    }

    fn existing_file() -> &'static str {
        concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml")
    }

    #[tokio::test]
    async fn test_missing_file_never_executes() {
        let harness = Harness::with_executor(HarnessConfig::default(), Canned::new(|| unreachable!()));
        let result = harness.run("/nonexistent/path.test.ts").await;
        assert!(!result.passed);
        assert_eq!(result.tests.len(), 1);
        assert_eq!(result.tests[0].name, "Test file not found");
        assert!(result.tests[0].error.as_deref().unwrap().contains("/nonexistent/path.test.ts"));
        assert!(harness.executor.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_output_parsed() {
        let harness = Harness::with_executor(
            HarnessConfig::default(),
            Canned::new(|| {
                Ok(RunOutput {
                    exit_code: Some(0),
                    output: " ✓ a.test.ts > S > works 1ms\n".to_string(),
                })
            }),
        );
        let result = harness.run(existing_file()).await;
        assert!(result.passed);
        assert_eq!(result.tests, vec![TestOutcome::passed("works")]);
        let seen = harness.executor.seen.lock().unwrap();
        assert!(seen[0].is_absolute());
    }

    #[tokio::test]
    async fn test_executor_error_becomes_outcome() {
        let harness = Harness::with_executor(
            HarnessConfig::default(),
            Canned::new(|| Err(HarnessError::Timeout(std::time::Duration::from_secs(5)))),
        );
        let result = harness.run(existing_file()).await;
        assert_eq!(
            result,
            ExecutionResult::failure("Test execution failed", "Test run timed out after 5s")
        );
    }

    #[tokio::test]
    async fn test_nonzero_exit_without_output_has_fallback() {
        let harness = Harness::with_executor(
            HarnessConfig::default(),
            Canned::new(|| {
                Ok(RunOutput {
                    exit_code: Some(1),
                    output: String::new(),
                })
            }),
        );
        let result = harness.run(existing_file()).await;
        assert!(!result.passed);
        assert_eq!(result.tests.len(), 1);
        assert_eq!(result.tests[0].name, "Test execution");
    }
}
