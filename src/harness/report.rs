//! Rendering of test-run results
//!
//! Reporting is separate from execution: the harness produces an [`ExecutionResult`] and a [`TestReporter`]
//! decides how to show it. Implement the trait for other formats (TAP, JUnit, ...).

use std::path::Path;

use super::result::{ExecutionResult, TestOutcome};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

// ============================================================================
// Test Reporter Trait
// ============================================================================

/// Receives the result of a test run.
pub trait TestReporter {
    /// Called before the runner is started
    fn on_run_start(&mut self, _test_file: &Path) {}

    /// Called once per outcome, in report order
    fn on_outcome(&mut self, outcome: &TestOutcome);

    /// Called after every outcome has been reported
    fn on_run_complete(&mut self, result: &ExecutionResult);
}

/// Feed a finished result through `reporter`.
pub fn report(reporter: &mut dyn TestReporter, result: &ExecutionResult) {
    for outcome in &result.tests {
        reporter.on_outcome(outcome);
    }
    reporter.on_run_complete(result);
}

// ============================================================================
// Console
// ============================================================================

/// Colored human-readable output on stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    pub color: bool,
}

impl ConsoleReporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Lines printed for one outcome.
    pub fn render_outcome(&self, outcome: &TestOutcome) -> String {
        if outcome.passed {
            return self.paint(GREEN, &format!("✓ {}", outcome.name));
        }

        let mut lines = vec![self.paint(RED, &format!("✗ {}", outcome.name))];
        if let Some(error) = &outcome.error {
            lines.push(self.paint(DIM, &format!("    {error}")));
        }
        if let Some(expected) = &outcome.expected {
            lines.push(self.paint(DIM, &format!("    Expected: {expected}")));
        }
        if let Some(received) = &outcome.received {
            lines.push(self.paint(DIM, &format!("    Received: {received}")));
        }
        lines.join("\n")
    }

    /// Closing summary line.
    pub fn render_summary(&self, result: &ExecutionResult) -> String {
        let mut parts = Vec::new();
        let passed = result.passed_count();
        let failed = result.failed_count();
        if passed > 0 {
            parts.push(self.paint(GREEN, &format!("{passed} passed")));
        }
        if failed > 0 {
            parts.push(self.paint(RED, &format!("{failed} failed")));
        }
        if parts.is_empty() {
            parts.push("no tests reported".to_string());
        }
        format!("====== {} ======", parts.join(", "))
    }
}

impl TestReporter for ConsoleReporter {
    fn on_run_start(&mut self, test_file: &Path) {
        eprintln!("Running {}", test_file.display());
    }

    fn on_outcome(&mut self, outcome: &TestOutcome) {
        eprintln!("{}", self.render_outcome(outcome));
    }

    fn on_run_complete(&mut self, result: &ExecutionResult) {
        eprintln!();
        eprintln!("{}", self.render_summary(result));
    }
}

// ============================================================================
// JSON
// ============================================================================

/// Prints the whole result as one JSON document on stdout (`{ "passed": ..., "tests": [...] }`).
#[derive(Debug, Default)]
pub struct JsonReporter {
    pub pretty: bool,
}

impl JsonReporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn render(&self, result: &ExecutionResult) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(result)
        } else {
            serde_json::to_string(result)
        }
    }
}

impl TestReporter for JsonReporter {
    fn on_outcome(&mut self, _outcome: &TestOutcome) {}

    fn on_run_complete(&mut self, result: &ExecutionResult) {
        match self.render(result) {
            Ok(json) => println!("{json}"),
            Err(err) => tracing::error!(error = %err, "failed to serialize test result"),
        }
    }
}
