//! Lesson test cases and generated test files
//!
//! A lesson carries its tests as `{ description, testCode }` pairs produced by a language model. Bodies are
//! normalized as they are ingested, then rendered into one test file per stage:
//!
//! ```text
//! import { describe, it, expect } from 'vitest';
//! import * as solution from '../solution.js';
//!
//! describe('Stage 1', () => {
//!   it('starts empty', () => {
//!     const q = new solution.Queue();
//!     expect(q.isEmpty()).toBe(true);
//!   });
//! });
//! ```

pub mod repair;

use std::sync::LazyLock;

use learn_core::lang::declarations::{self, DeclarationId};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalize::{self, DEFAULT_NAMESPACE_ALIAS};

pub use repair::{FixError, fix_test_file};

/// Relative module specifier of the learner's solution, seen from the stage's `tests/` directory.
pub const SOLUTION_MODULE: &str = "../solution.js";

/// Test framework whose globals the generated file imports.
pub const FRAMEWORK_MODULE: &str = "vitest";

static AWAIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bawait\s").expect("INVARIANT: await pattern is a constant"));

// ============================================================================
// Test Case
// ============================================================================

/// One test case of a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTestCase")]
pub struct TestCase {
    /// Short test name, e.g. "should return null when queue is empty".
    pub description: String,
    /// Statements only: no imports, no `describe(...)`, no `it(...)`.
    #[serde(rename = "testCode")]
    pub test_code: String,
}

/// Wire shape before ingestion cleaning.
#[derive(Deserialize)]
struct RawTestCase {
    description: String,
    #[serde(rename = "testCode")]
    test_code: String,
}

impl From<RawTestCase> for TestCase {
    fn from(raw: RawTestCase) -> Self {
        TestCase::new(raw.description, raw.test_code)
    }
}

impl TestCase {
    /// Build a test case, normalizing the body if it carries wrappers, imports, or bare constructions.
    pub fn new(description: impl Into<String>, test_code: impl Into<String>) -> Self {
        let description = description.into();
        let mut test_code = test_code.into();
        if normalize::needs_cleaning(&test_code) {
            tracing::debug!(case = %description, "cleaning test body on ingest");
            test_code = normalize::normalize(&test_code);
        }
        Self { description, test_code }
    }

    /// Whether the body awaits, which makes the generated callback `async`.
    pub fn is_async(&self) -> bool {
        AWAIT.is_match(&self.test_code)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a complete test file with one `describe` block holding every case.
pub fn render_suite(title: &str, cases: &[TestCase]) -> String {
    let mut out = String::new();
    out.push_str(&format!("import {{ describe, it, expect }} from '{FRAMEWORK_MODULE}';\n"));
    out.push_str(&format!(
        "import * as {DEFAULT_NAMESPACE_ALIAS} from '{SOLUTION_MODULE}';\n"
    ));
    out.push_str(&format!("\ndescribe('{}', () => {{", escape_single_quoted(title)));

    for case in cases {
        out.push('\n');
        out.push_str(&render_case(
            "  ",
            declarations::as_str(DeclarationId::It),
            &quote(&case.description),
            &case.test_code,
        ));
    }

    out.push_str("\n});\n");
    out
}

/// Render one case block at `indent`, with the body indented one level deeper.
///
/// `title_literal` is emitted verbatim and must already be a quoted string literal.
pub(crate) fn render_case(indent: &str, keyword: &str, title_literal: &str, body: &str) -> String {
    let signature = if AWAIT.is_match(body) { "async () =>" } else { "() =>" };
    let body_indent = format!("{indent}  ");
    let indented = body
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{body_indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{indent}{keyword}({title_literal}, {signature} {{\n{indented}\n{indent}}});")
}

fn quote(text: &str) -> String {
    format!("'{}'", escape_single_quoted(text))
}

fn escape_single_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
