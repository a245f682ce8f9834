//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::harness::report::{self, ConsoleReporter, JsonReporter, TestReporter};
use crate::harness::{Harness, HarnessConfig};
use crate::normalize::{self, NormalizeConfig, Normalizer};
use crate::suite::{self, TestCase};

use super::{CliError, CliResult, ExitCode};

/// Maximum source size accepted from a file or stdin (10 MB).
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

// ============================================================================
// Input
// ============================================================================

/// Read a source file with a size limit.
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE`
pub fn read_source(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))
}

/// Resolve a fragment from a file, an inline `-c` argument, or stdin.
fn read_fragment(file: Option<PathBuf>, code: Option<String>) -> CliResult<String> {
    if let Some(code) = code {
        return Ok(code);
    }
    if let Some(file) = file {
        return read_source(&file);
    }

    let mut buf = String::new();
    io::stdin()
        .take(MAX_SOURCE_SIZE)
        .read_to_string(&mut buf)
        .map_err(|e| CliError::failure(format!("Error reading stdin: {}", e)))?;
    Ok(buf)
}

// ============================================================================
// Normalization commands
// ============================================================================

/// Print the normalized form of a fragment.
pub fn clean(file: Option<PathBuf>, code: Option<String>, alias: &str) -> CliResult<ExitCode> {
    let fragment = read_fragment(file, code)?;
    let normalizer = Normalizer::new(&NormalizeConfig::new().with_alias(alias));
    println!("{}", normalizer.normalize(&fragment));
    Ok(ExitCode::SUCCESS)
}

/// Succeed when a fragment is already clean.
pub fn check(file: Option<PathBuf>, code: Option<String>) -> CliResult<ExitCode> {
    let fragment = read_fragment(file, code)?;
    if normalize::needs_cleaning(&fragment) {
        return Err(CliError::failure("Fragment needs cleaning (run `learn clean`)"));
    }
    println!("✓ fragment is clean");
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Test files
// ============================================================================

/// Repair generated test files, or report which ones would change.
pub fn fix_files(files: &[PathBuf], check_mode: bool) -> CliResult<ExitCode> {
    let mut changed_count = 0;
    let mut error_count = 0;

    for path in files {
        let source = match read_source(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}", e.message);
                error_count += 1;
                continue;
            }
        };

        let fixed = match suite::fix_test_file(&path.display().to_string(), &source) {
            Ok(fixed) => fixed,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                error_count += 1;
                continue;
            }
        };

        if fixed == source {
            continue;
        }
        changed_count += 1;

        if check_mode {
            println!("Would fix: {}", path.display());
        } else if let Err(e) = fs::write(path, &fixed) {
            eprintln!("Error writing {}: {}", path.display(), e);
            error_count += 1;
        } else {
            println!("Fixed: {}", path.display());
        }
    }

    if error_count > 0 {
        return Err(CliError::failure(format!("{} file(s) could not be repaired", error_count)));
    }
    if check_mode && changed_count > 0 {
        return Err(CliError::failure(format!("\n{} file(s) would be fixed", changed_count)));
    }
    if changed_count == 0 {
        println!("✓ {} file(s) already clean", files.len());
    }
    Ok(ExitCode::SUCCESS)
}

/// Render a suite file from a JSON array of test cases.
pub fn render(cases_path: &Path, title: &str, output: Option<&Path>) -> CliResult<ExitCode> {
    let json = read_source(cases_path)?;
    let cases: Vec<TestCase> = serde_json::from_str(&json)
        .map_err(|e| CliError::failure(format!("Invalid test cases in '{}': {}", cases_path.display(), e)))?;

    let rendered = suite::render_suite(title, &cases);
    match output {
        Some(out) => {
            fs::write(out, rendered)
                .map_err(|e| CliError::failure(format!("Error writing {}: {}", out.display(), e)))?;
            eprintln!("Wrote {} test case(s) to {}", cases.len(), out.display());
        }
        None => print!("{}", rendered),
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Running tests
// ============================================================================

/// Run one test file and report the outcomes.
pub fn run_test_file(
    file: &Path,
    runner: Option<&str>,
    cwd: Option<PathBuf>,
    timeout_secs: Option<u64>,
    json: bool,
) -> CliResult<ExitCode> {
    let mut config = HarnessConfig::new();
    if let Some(runner) = runner {
        config = config
            .with_command_line(runner)
            .ok_or_else(|| CliError::failure("Error: --runner requires a command"))?;
    }
    if let Some(dir) = cwd {
        config = config.with_working_dir(dir);
    }
    if let Some(secs) = timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::failure(format!("Error starting async runtime: {}", e)))?;

    let mut reporter: Box<dyn TestReporter> = if json {
        Box::new(JsonReporter::new(true))
    } else {
        Box::new(ConsoleReporter::new(io::stderr().is_terminal()))
    };

    reporter.on_run_start(file);
    let result = runtime.block_on(Harness::new(config).run(file));
    report::report(reporter.as_mut(), &result);

    Ok(if result.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
