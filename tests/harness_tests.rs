//! End-to-end harness tests
//!
//! A small `sh` script stands in for the test runner: it receives the absolute test file path as `$1` and prints
//! reporter-shaped output, so spawning, output capture, exit status, and timeouts are exercised for real.

use std::path::PathBuf;
use std::time::Duration;

use learn::harness::{Harness, HarnessConfig, TestOutcome};

fn existing_test_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")
}

#[cfg(unix)]
fn script_runner(script: &str) -> HarnessConfig {
    HarnessConfig::new().with_runner("sh", ["-c", script, "sh"])
}

// =============================================================================
// Environment failures
// =============================================================================

#[tokio::test]
async fn missing_file_is_reported_without_spawning() {
    let result = learn::run_tests("/nonexistent/path.test.ts").await;
    assert!(!result.passed);
    assert_eq!(result.tests.len(), 1);
    assert_eq!(result.tests[0].name, "Test file not found");
    assert_eq!(
        result.tests[0].error.as_deref(),
        Some("Test file does not exist: /nonexistent/path.test.ts")
    );
}

#[tokio::test]
async fn unknown_runner_is_a_spawn_failure() {
    let config = HarnessConfig::new().with_runner("learn-no-such-runner-binary", Vec::<String>::new());
    let result = Harness::new(config).run(existing_test_file()).await;
    assert!(!result.passed);
    assert_eq!(result.tests.len(), 1);
    assert_eq!(result.tests[0].name, "Test execution failed");
    assert!(
        result.tests[0]
            .error
            .as_deref()
            .unwrap()
            .contains("learn-no-such-runner-binary")
    );
}

// =============================================================================
// Script runner
// =============================================================================

#[cfg(unix)]
#[tokio::test]
async fn passing_run_lists_every_test() {
    let config = script_runner(
        r#"printf ' ✓ %s > Stage 1 > starts empty 1ms\n ✓ %s > Stage 1 > grows 2ms\n' "$1" "$1"; exit 0"#,
    );
    let result = Harness::new(config).run(existing_test_file()).await;
    assert!(result.passed);
    assert_eq!(
        result.tests,
        vec![TestOutcome::passed("starts empty"), TestOutcome::passed("grows")]
    );
}

#[cfg(unix)]
#[tokio::test]
async fn stderr_details_are_attached_to_failures() {
    let config = script_runner(
        r#"echo ' × t.test.ts > Stage 1 > breaks'; echo 'AssertionError: expected 1 to be 2' >&2; exit 1"#,
    );
    let result = Harness::new(config).run(existing_test_file()).await;
    assert!(!result.passed);
    assert_eq!(result.tests.len(), 1);
    assert_eq!(result.tests[0].name, "breaks");
    assert_eq!(result.tests[0].error.as_deref(), Some("expected 1 to be 2"));
}

#[cfg(unix)]
#[tokio::test]
async fn silent_crash_gets_fallback_outcome() {
    let result = Harness::new(script_runner("exit 3")).run(existing_test_file()).await;
    assert!(!result.passed);
    assert_eq!(result.tests.len(), 1);
    assert_eq!(result.tests[0].name, "Test execution");
}

#[cfg(unix)]
#[tokio::test]
async fn runner_sees_absolute_path_and_working_dir() {
    let crates_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("crates");
    let config = script_runner(r#"echo "Error: cwd=$(pwd) file=$1"; exit 1"#).with_working_dir(&crates_dir);
    let result = Harness::new(config).run("Cargo.toml").await;

    let error = result.tests[0].error.clone().unwrap();
    assert!(error.contains("/crates file="), "{error}");
    assert!(error.ends_with("/Cargo.toml"), "{error}");
    assert!(error.contains("file=/"), "{error}");
}

#[cfg(unix)]
#[tokio::test]
async fn hung_runner_is_killed_on_timeout() {
    let config = script_runner("sleep 30").with_timeout(Duration::from_secs(1));
    let started = std::time::Instant::now();
    let result = Harness::new(config).run(existing_test_file()).await;

    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(!result.passed);
    assert_eq!(result.tests[0].name, "Test execution failed");
    assert_eq!(result.tests[0].error.as_deref(), Some("Test run timed out after 1s"));
}
