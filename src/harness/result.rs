//! Structured test-run results

use serde::{Deserialize, Serialize};

/// Name of the outcome reported when the test file is missing.
pub const MISSING_FILE_NAME: &str = "Test file not found";

/// Name of the outcome reported when the runner could not be spawned (or was killed on timeout).
pub const SPAWN_FAILURE_NAME: &str = "Test execution failed";

/// Name of the synthetic outcome added when the run failed but no failure could be parsed.
pub const FALLBACK_NAME: &str = "Test execution";

/// Outcome of one test.
///
/// A passed outcome never carries `error`, `expected`, or `received`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub name: String,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
}

impl TestOutcome {
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            error: None,
            expected: None,
            received: None,
        }
    }

    pub fn failed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            error: None,
            expected: None,
            received: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Fill every field still empty on `self` from `other`.
    pub(crate) fn absorb(&mut self, other: TestOutcome) {
        self.error = self.error.take().or(other.error);
        self.expected = self.expected.take().or(other.expected);
        self.received = self.received.take().or(other.received);
    }
}

/// Result of one test run.
///
/// `passed` is true only when every outcome passed, and a failing result always holds at least one failed outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub passed: bool,
    pub tests: Vec<TestOutcome>,
}

impl ExecutionResult {
    /// Single failed outcome, used for environment failures where nothing ran.
    pub fn failure(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            passed: false,
            tests: vec![TestOutcome::failed(name).with_error(error)],
        }
    }

    pub fn passed_count(&self) -> usize {
        self.tests.iter().filter(|t| t.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.tests.len() - self.passed_count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestOutcome> {
        self.tests.iter().filter(|t| !t.passed)
    }
}
