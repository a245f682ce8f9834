//! Code body extraction
//!
//! Finds the innermost executable statement block in a fragment that may still carry imports and suite/case
//! wrappers. The default strategy is a brace-depth scan, not a parser: it recognizes string literals, template
//! literals, and comments well enough that braces inside them don't count, and fails closed on anything it
//! cannot balance.

use super::patterns::patterns;

// ============================================================================
// Strategy Trait
// ============================================================================

/// Strategy for locating the body of the innermost test block.
///
/// Implement this to swap the heuristic scanner for a parser-backed extractor.
pub trait BodyExtractor {
    /// Return the body of the selected block, or `None` when no block is found or its braces never balance.
    fn extract(&self, fragment: &str) -> Option<String>;
}

/// Regex openers plus a brace-depth scan (default strategy).
///
/// Selection policy:
/// - the **last** case opener (`it(...)` / `test(...)`) wins when several sibling cases are present;
/// - otherwise the **first** suite opener (`describe(...)`);
/// - otherwise nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BraceScanExtractor;

impl BodyExtractor for BraceScanExtractor {
    #[tracing::instrument(level = "trace", skip_all, fields(fragment_len = fragment.len()))]
    fn extract(&self, fragment: &str) -> Option<String> {
        let p = patterns();
        let code = strip_imports(fragment);

        if let Some(case) = p.case_opener.find_iter(&code).last() {
            // A broken last case does not fall back to the suite: the fragment is malformed.
            return scan_block(&code, case.end()).map(str::to_string);
        }

        let suite = p.suite_opener.find(&code)?;
        scan_block(&code, suite.end()).map(str::to_string)
    }
}

/// Remove every line-anchored import statement.
pub fn strip_imports(fragment: &str) -> String {
    patterns().import_statement.replace_all(fragment, "").into_owned()
}

// ============================================================================
// Brace Scanner
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Code,
    Quoted(char),
    Template,
    LineComment,
    BlockComment,
}

/// Return the text between `start` (just past an opening `{`) and its matching `}`.
///
/// Returns `None` when depth never returns to zero or a literal/comment is left open at end of input.
pub fn scan_block(code: &str, start: usize) -> Option<&str> {
    let rest = code.get(start..)?;
    let mut depth = 1usize;
    let mut state = ScanState::Code;
    let mut chars = rest.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match state {
            ScanState::Code => match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&rest[..idx]);
                    }
                }
                '\'' | '"' => state = ScanState::Quoted(c),
                '`' => state = ScanState::Template,
                '/' => match chars.peek() {
                    Some((_, '/')) => {
                        chars.next();
                        state = ScanState::LineComment;
                    }
                    Some((_, '*')) => {
                        chars.next();
                        state = ScanState::BlockComment;
                    }
                    _ => {}
                },
                _ => {}
            },
            ScanState::Quoted(quote) => match c {
                '\\' => {
                    chars.next();
                }
                // Plain string literals cannot span lines; a stray apostrophe should not swallow the block.
                '\n' => state = ScanState::Code,
                _ if c == quote => state = ScanState::Code,
                _ => {}
            },
            ScanState::Template => match c {
                '\\' => {
                    chars.next();
                }
                '`' => state = ScanState::Code,
                _ => {}
            },
            ScanState::LineComment => {
                if c == '\n' {
                    state = ScanState::Code;
                }
            }
            ScanState::BlockComment => {
                if c == '*' && matches!(chars.peek(), Some((_, '/'))) {
                    chars.next();
                    state = ScanState::Code;
                }
            }
        }
    }

    None
}
