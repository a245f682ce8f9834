//! Harness configuration

use std::path::PathBuf;
use std::time::Duration;

/// Runner program used when none is configured.
pub const DEFAULT_PROGRAM: &str = "npx";

/// Arguments placed before the test file path.
pub const DEFAULT_ARGS: &[&str] = &["vitest", "run", "--reporter=verbose"];

/// How to launch the external test runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Executable to spawn
    pub program: String,
    /// Arguments passed before the absolute test file path
    pub args: Vec<String>,
    /// Directory holding the runner's configuration (`None` keeps the current directory)
    pub working_dir: Option<PathBuf>,
    /// Kill the runner and report a failed run after this long
    pub timeout: Option<Duration>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: DEFAULT_ARGS.iter().map(|a| a.to_string()).collect(),
            working_dir: None,
            timeout: None,
        }
    }
}

impl HarnessConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the runner program and its leading arguments
    pub fn with_runner<I, S>(mut self, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.program = program.into();
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a whitespace-separated command line (`"npx vitest run"`) into program and arguments.
    ///
    /// Returns `None` for a blank command line.
    pub fn with_command_line(self, command_line: &str) -> Option<Self> {
        let mut words = command_line.split_whitespace();
        let program = words.next()?;
        Some(self.with_runner(program, words))
    }

    /// Set the runner's working directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Set the run timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
