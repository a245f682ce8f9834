//! Compiled regular expressions shared by the extractor, the orchestrator, and the cleanliness gate.
//!
//! Every keyword alternation is generated from the `learn_core` declaration registry, so adding a declaration
//! spelling there is enough for all of these patterns to pick it up.

use std::sync::LazyLock;

use learn_core::lang::declarations;
use regex::Regex;

/// Boundary that keeps `x.it(` and `regex.test(` from reading as declarations.
const CALL_BOUNDARY: &str = r"(?:^|[^.\w$])";

/// One string literal in any of the three quote styles.
const TITLE: &str = r#"(?:'(?:[^'\\\n]|\\.)*'|"(?:[^"\\\n]|\\.)*"|`(?:[^`\\]|\\.)*`)"#;

/// Zero-argument arrow callback up to and including its opening brace.
const CALLBACK: &str = r"(?:async\s*)?\(\s*\)\s*=>\s*\{";

pub(crate) struct Patterns {
    /// Line-anchored `import` keyword (cleanliness gate).
    pub import_line: Regex,
    /// Whole import statement, including a brace list that spans several lines.
    pub import_statement: Regex,
    /// Any declaration keyword used as a call.
    pub declaration_call: Regex,
    /// Case opener up to its body brace.
    pub case_opener: Regex,
    /// Suite opener up to its body brace.
    pub suite_opener: Regex,
    /// Declaration opener anchored at a line start (shallow pass).
    pub wrapper_opener: Regex,
    /// One `})` / `});` closer at the end of the text (shallow pass).
    pub wrapper_closer: Regex,
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::compile);

/// Return the process-wide compiled pattern set.
pub(crate) fn patterns() -> &'static Patterns {
    &PATTERNS
}

impl Patterns {
    fn compile() -> Self {
        let all = alternation(declarations::all_keywords());
        let cases = alternation(declarations::case_keywords());
        let suites = alternation(declarations::suite_keywords());
        let modifiers = format!(r"(?:\.(?:{}))*", declarations::MODIFIERS.join("|"));

        Self {
            import_line: build(r"(?m)^import\s+"),
            import_statement: build(r"(?m)^import\s+[^;\n{]*(?:\{[^}]*\}[^;\n]*)?;?[ \t]*(?:\r?\n)?"),
            declaration_call: build(&format!(r"{CALL_BOUNDARY}(?:{all}){modifiers}\s*\(")),
            case_opener: build(&opener(&cases, &modifiers)),
            suite_opener: build(&opener(&suites, &modifiers)),
            wrapper_opener: build(&format!(
                r"(?m)^[ \t]*(?:{all}){modifiers}\s*\([^)]*,\s*{CALLBACK}[ \t]*"
            )),
            wrapper_closer: build(r"\}\s*\)\s*;?\s*$"),
        }
    }
}

fn opener(keywords: &str, modifiers: &str) -> String {
    format!(r"{CALL_BOUNDARY}(?:{keywords}){modifiers}\s*\(\s*{TITLE}\s*,\s*{CALLBACK}")
}

fn alternation(words: impl Iterator<Item = &'static str>) -> String {
    words.map(regex::escape).collect::<Vec<_>>().join("|")
}

fn build(pattern: &str) -> Regex {
    Regex::new(pattern).expect("INVARIANT: normalization patterns are built from constant registry data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        let p = patterns();
        assert!(p.import_line.is_match("import x from 'y';"));
        assert!(p.declaration_call.is_match("describe('a', () => {"));
    }

    #[test]
    fn test_declaration_call_skips_method_calls() {
        let p = patterns();
        assert!(!p.declaration_call.is_match("expect(/a/.test('a')).toBe(true);"));
        assert!(!p.declaration_call.is_match("const split = s.split(',');"));
        assert!(p.declaration_call.is_match("  it.only('x', () => {})"));
        assert!(p.declaration_call.is_match("test ('x', () => {})"));
    }

    #[test]
    fn test_case_opener_quote_styles() {
        let p = patterns();
        for src in [
            "it('a', () => {",
            "it(\"a\", () => {",
            "it(`a`, () => {",
            "test('it\\'s fine', async () => {",
            "it.skip('a', () => {",
        ] {
            assert!(p.case_opener.is_match(src), "{src}");
        }
        assert!(!p.case_opener.is_match("describe('a', () => {"));
    }

    #[test]
    fn test_import_statement_spanning_lines() {
        let p = patterns();
        let src = "import {\n  a,\n  b,\n} from './x';\nconst y = 1;";
        assert_eq!(p.import_statement.replace_all(src, ""), "const y = 1;");
    }

    #[test]
    fn test_wrapper_closer_anchored_at_end() {
        let p = patterns();
        assert!(p.wrapper_closer.is_match("x();\n});\n"));
        assert!(!p.wrapper_closer.is_match("});\nx();"));
    }
}
