//! CLI module for the `learn` tool
//!
//! ## Commands
//!
//! - `clean [FILE]` - Normalize a test-body fragment and print it
//! - `check [FILE]` - Exit non-zero if a fragment needs cleaning
//! - `fix <TEST_FILE>...` - Repair generated test files in place
//! - `render <CASES_JSON>` - Render a test file from lesson test cases
//! - `run <TEST_FILE>` - Run a test file and summarize the outcomes
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::normalize::config::is_valid_alias;
use crate::version::LEARN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Clean AI-generated test bodies and run lesson tests
#[derive(Parser, Debug)]
#[command(name = "learn")]
#[command(version = LEARN_VERSION)]
#[command(about = "Clean AI-generated test bodies and run lesson tests", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize a test-body fragment and print the result
    Clean {
        /// File holding the fragment (stdin when neither FILE nor -c is given)
        #[arg(value_name = "FILE", conflicts_with = "code")]
        file: Option<PathBuf>,
        /// Inline fragment
        #[arg(short = 'c', long = "code", value_name = "CODE")]
        code: Option<String>,
        /// Namespace alias for user-defined constructors
        #[arg(long, value_name = "ALIAS", default_value = "solution", value_parser = parse_alias)]
        alias: String,
    },

    /// Exit with status 1 if a fragment needs cleaning
    Check {
        /// File holding the fragment (stdin when neither FILE nor -c is given)
        #[arg(value_name = "FILE", conflicts_with = "code")]
        file: Option<PathBuf>,
        /// Inline fragment
        #[arg(short = 'c', long = "code", value_name = "CODE")]
        code: Option<String>,
    },

    /// Normalize every test body of generated test files in place
    Fix {
        /// Test files to repair
        #[arg(value_name = "TEST_FILE", required = true)]
        files: Vec<PathBuf>,
        /// Report files that would change without writing them
        #[arg(long)]
        check: bool,
    },

    /// Render a test file from a JSON array of `{ description, testCode }` cases
    Render {
        /// JSON file with the test cases
        #[arg(value_name = "CASES_JSON")]
        cases: PathBuf,
        /// Title of the enclosing describe block
        #[arg(long, value_name = "TITLE")]
        title: String,
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Run a test file and summarize the outcomes
    Run {
        /// Test file to run
        #[arg(value_name = "TEST_FILE")]
        file: PathBuf,
        /// Runner command line; the absolute test file path is appended
        #[arg(long, value_name = "CMD")]
        runner: Option<String>,
        /// Working directory of the runner (where its config lives)
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,
        /// Kill the runner after this many seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
        /// Print the result as JSON on stdout
        #[arg(long)]
        json: bool,
    },
}

fn parse_alias(value: &str) -> Result<String, String> {
    if is_valid_alias(value) {
        Ok(value.to_string())
    } else {
        Err(format!("`{value}` is not a valid identifier"))
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Clean { file, code, alias } => commands::clean(file, code, &alias),
        Command::Check { file, code } => commands::check(file, code),
        Command::Fix { files, check } => commands::fix_files(&files, check),
        Command::Render { cases, title, output } => commands::render(&cases, &title, output.as_deref()),
        Command::Run {
            file,
            runner,
            cwd,
            timeout,
            json,
        } => commands::run_test_file(&file, runner.as_deref(), cwd, timeout, json),
    }
}

// ============================================================================
// Tests
// ============================================================================
