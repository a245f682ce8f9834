//! Repair of already-generated test files
//!
//! Files written before ingestion cleaning existed can contain nested imports, suites, and cases inside their
//! `it(...)` blocks. Repair walks every case block that starts a line, normalizes its body in place, and recomputes
//! the callback signature. Everything outside case blocks is kept byte for byte.

use std::sync::LazyLock;

use learn_core::lang::declarations;
use miette::{Diagnostic, NamedSource, SourceSpan};
use regex::Regex;
use thiserror::Error;

use super::render_case;
use crate::normalize::{self, extract};

/// Case opener at a line start: indent, keyword (with modifiers), and the title literal.
static CASE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    let keywords = declarations::case_keywords()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    let modifiers = declarations::MODIFIERS.join("|");
    let pattern = format!(
        r#"(?m)^([ \t]*)((?:{keywords})(?:\.(?:{modifiers}))*)\s*\(\s*('(?:[^'\\\n]|\\.)*'|"(?:[^"\\\n]|\\.)*"|`(?:[^`\\]|\\.)*`)\s*,\s*(?:async\s*)?\(\s*\)\s*=>\s*\{{"#
    );
    Regex::new(&pattern).expect("INVARIANT: case line pattern is built from constant registry data")
});

/// `)` with an optional `;` right after a case body's closing brace.
static CASE_CLOSER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\)[ \t]*;?").expect("INVARIANT: closer pattern is a constant"));

/// Errors that make a test file unrepairable. The file is left untouched when any of these occur.
#[derive(Debug, Error, Diagnostic)]
pub enum FixError {
    #[error("test case {title} never closes")]
    #[diagnostic(
        code(learn::fix::unbalanced_case),
        help("the braces of this case do not balance; regenerate the stage's tests")
    )]
    UnbalancedCase {
        title: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("opened here")]
        span: SourceSpan,
    },

    #[error("test case {title} is missing its closing `)`")]
    #[diagnostic(code(learn::fix::missing_paren))]
    MissingParen {
        title: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected `)` after this brace")]
        span: SourceSpan,
    },
}

/// Normalize the body of every case block in `source`, named `name` in diagnostics.
///
/// Returns the repaired text, which equals `source` when every body is already clean.
#[tracing::instrument(skip_all, fields(file = name, len = source.len()))]
pub fn fix_test_file(name: &str, source: &str) -> Result<String, FixError> {
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    let mut repaired = 0usize;

    while let Some(caps) = CASE_LINE.captures_at(source, cursor) {
        let (Some(whole), Some(indent), Some(keyword), Some(title)) =
            (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
        else {
            break;
        };

        let body = extract::scan_block(source, whole.end()).ok_or_else(|| FixError::UnbalancedCase {
            title: title.as_str().to_string(),
            src: NamedSource::new(name, source.to_string()),
            span: (whole.start(), whole.len()).into(),
        })?;
        let close_brace = whole.end() + body.len();

        let closer = CASE_CLOSER
            .find(&source[close_brace + 1..])
            .ok_or_else(|| FixError::MissingParen {
                title: title.as_str().to_string(),
                src: NamedSource::new(name, source.to_string()),
                span: (close_brace, 1).into(),
            })?;
        let block_end = close_brace + 1 + closer.end();

        let cleaned = normalize::normalize(body);
        let rebuilt = render_case(indent.as_str(), keyword.as_str(), title.as_str(), &cleaned);
        if rebuilt != source[whole.start()..block_end] {
            repaired += 1;
        }

        out.push_str(&source[cursor..whole.start()]);
        out.push_str(&rebuilt);
        cursor = block_end;
    }

    out.push_str(&source[cursor..]);
    tracing::debug!(repaired, "test file repair finished");
    Ok(out)
}
