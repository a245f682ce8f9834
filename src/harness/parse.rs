//! Verbose reporter output parsing
//!
//! The runner's human-oriented output is the only record of which tests ran. Two independent passes read it:
//!
//! - **passes**: `✓ file > suite > name 3ms` lines become passed outcomes;
//! - **failures**: `× file > suite > name` / `FAIL file > suite > name` lines open a pending failure, which then
//!   collects an error message and the first diff values until the next failure line or end of input.
//!
//! Reporters print each failure twice (once in the run listing, once in the summary). Sightings with the same name
//! are merged, and earlier sightings keep the fields they already captured.

use std::sync::LazyLock;

use learn_core::lang::reporter::{self, MarkerId};
use regex::Regex;

use super::result::{ExecutionResult, FALLBACK_NAME, TestOutcome};

/// Error message of the fallback outcome when no output line mentions an error.
pub const GENERIC_FAILURE_MESSAGE: &str = "Tests failed, but no failure details could be read from the runner output";

static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").expect("INVARIANT: ANSI escape pattern is a constant")
});

static DURATION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+\d+(?:\.\d+)?\s*m?s$").expect("INVARIANT: duration pattern is a constant")
});

static TYPED_ERROR: LazyLock<Regex> = LazyLock::new(|| {
    let names = reporter::TYPED_ERRORS.join("|");
    Regex::new(&format!(r"\b({names}):\s*(.+)")).expect("INVARIANT: typed error pattern is built from constants")
});

/// Remove terminal color and cursor escapes.
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Build the result of a finished run from its combined output and exit status.
#[tracing::instrument(level = "debug", skip_all, fields(exit_ok = exit_ok, output_len = output.len()))]
pub fn parse_output(output: &str, exit_ok: bool) -> ExecutionResult {
    let clean = strip_ansi(output);
    let lines: Vec<&str> = clean.lines().collect();

    let mut indexed: Vec<(usize, TestOutcome)> = collect_passes(&lines);
    indexed.extend(collect_failures(&lines));
    indexed.sort_by_key(|(line, _)| *line);
    let mut tests: Vec<TestOutcome> = indexed.into_iter().map(|(_, outcome)| outcome).collect();

    if !exit_ok && tests.iter().all(|t| t.passed) {
        let error = lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !reporter::contains(MarkerId::Passed, l))
            .find(|l| reporter::ERROR_INDICATORS.iter().any(|i| l.contains(i)))
            .unwrap_or(GENERIC_FAILURE_MESSAGE);
        tests.push(TestOutcome::failed(FALLBACK_NAME).with_error(error));
    }

    let passed = exit_ok && tests.iter().all(|t| t.passed);
    tracing::debug!(outcomes = tests.len(), passed, "parsed runner output");
    ExecutionResult { passed, tests }
}

// ============================================================================
// Passes
// ============================================================================

fn collect_passes(lines: &[&str]) -> Vec<(usize, TestOutcome)> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| reporter::contains(MarkerId::Passed, line))
        .filter_map(|(idx, line)| test_name(line).map(|name| (idx, TestOutcome::passed(name))))
        .collect()
}

// ============================================================================
// Failures
// ============================================================================

/// Failure being assembled from the lines after its header.
struct Pending {
    line: usize,
    /// Full `file > suite > name` path; two sightings are the same test only when their paths agree.
    path: String,
    outcome: TestOutcome,
}

fn collect_failures(lines: &[&str]) -> Vec<(usize, TestOutcome)> {
    let mut done: Vec<Pending> = Vec::new();
    let mut pending: Option<Pending> = None;

    for (idx, line) in lines.iter().enumerate() {
        if reporter::contains(MarkerId::Failed, line) {
            if let (Some(name), Some(path)) = (test_name(line), failure_path(line)) {
                if let Some(prev) = pending.take() {
                    merge_into(&mut done, prev);
                }
                pending = Some(Pending {
                    line: idx,
                    path,
                    outcome: TestOutcome::failed(name),
                });
                continue;
            }
        }

        if let Some(p) = pending.as_mut() {
            capture_detail(&mut p.outcome, line);
        }
    }

    if let Some(prev) = pending.take() {
        merge_into(&mut done, prev);
    }
    done.into_iter().map(|p| (p.line, p.outcome)).collect()
}

fn merge_into(done: &mut Vec<Pending>, pending: Pending) {
    match done.iter_mut().find(|p| p.path == pending.path) {
        Some(existing) => existing.outcome.absorb(pending.outcome),
        None => done.push(pending),
    }
}

/// Record whatever `line` says about the pending failure. Every field keeps its first value.
fn capture_detail(outcome: &mut TestOutcome, line: &str) {
    let trimmed = line.trim();

    if let Some(message) = trimmed.strip_prefix(reporter::as_str(MarkerId::Arrow)) {
        set_once(&mut outcome.error, message.trim());
        return;
    }

    if let Some(pos) = trimmed.find(reporter::ASSERTION_ERROR_PREFIX) {
        set_once(
            &mut outcome.error,
            trimmed[pos + reporter::ASSERTION_ERROR_PREFIX.len()..].trim(),
        );
        return;
    }

    if let Some(value) = trimmed.strip_prefix('-') {
        set_diff_value(&mut outcome.expected, value);
        return;
    }

    if let Some(value) = trimmed.strip_prefix('+') {
        set_diff_value(&mut outcome.received, value);
        return;
    }

    if outcome.error.is_none() {
        if let Some(caps) = TYPED_ERROR.captures(trimmed) {
            outcome.error = Some(format!("{}: {}", &caps[1], caps[2].trim()));
        }
    }
}

fn set_diff_value(slot: &mut Option<String>, raw: &str) {
    let value = raw.trim();
    if value.is_empty() || reporter::DIFF_HEADERS.contains(&value) {
        return;
    }
    set_once(slot, value);
}

fn set_once(slot: &mut Option<String>, value: &str) {
    if slot.is_none() && !value.is_empty() {
        *slot = Some(value.to_string());
    }
}

/// Hierarchy path of a failure line: the text after the earliest failure marker, without a duration suffix.
///
/// Separator spellings are unified so a listing line and a summary line for the same test agree.
fn failure_path(line: &str) -> Option<String> {
    let (pos, marker) = reporter::spellings(MarkerId::Failed)
        .filter_map(|marker| line.find(marker).map(|pos| (pos, marker)))
        .min_by_key(|(pos, _)| *pos)?;

    let tail = line[pos + marker.len()..].trim();
    let path = DURATION_SUFFIX.replace(tail, "");
    let canonical = reporter::as_str(MarkerId::Separator);
    let path = reporter::spellings(MarkerId::Separator)
        .fold(path.trim().to_string(), |acc, sep| acc.replace(sep, canonical));
    let segments: Vec<&str> = path.split(canonical).map(str::trim).collect();
    (!path.is_empty()).then(|| segments.join(&format!(" {canonical} ")))
}

/// Test name from a reporter line: the segment after the last separator, without a duration suffix.
fn test_name(line: &str) -> Option<String> {
    let (pos, sep) = reporter::spellings(MarkerId::Separator)
        .filter_map(|sep| line.rfind(sep).map(|pos| (pos, sep)))
        .max_by_key(|(pos, _)| *pos)?;

    let tail = line[pos + sep.len()..].trim();
    let name = DURATION_SUFFIX.replace(tail, "");
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}
