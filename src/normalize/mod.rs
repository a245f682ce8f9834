//! Test-body normalization
//!
//! Turns an untrusted, often malformed code fragment into a body that can be embedded verbatim inside a generated
//! `it(...)` block:
//!
//! 1. strip `import` statements;
//! 2. extract the innermost case (or suite) body, or fall back to a shallow strip of wrapper lines;
//! 3. route construction of user-defined types through the namespace alias;
//! 4. canonicalize whitespace.
//!
//! The pipeline repeats until the text stops changing, so `normalize` is idempotent.
//!
//! ## Examples
//! ```rust
//! let fragment = "describe('Q', () => {\n  it('works', () => {\n    const q = new Queue();\n  });\n});";
//! assert_eq!(learn::normalize::normalize(fragment), "const q = new solution.Queue();");
//! assert!(!learn::normalize::needs_cleaning("const q = new solution.Queue();"));
//! ```

pub mod config;
pub mod extract;
mod patterns;
pub mod rewrite;
pub mod whitespace;

use std::sync::LazyLock;

pub use config::{DEFAULT_NAMESPACE_ALIAS, NormalizeConfig};
pub use extract::{BodyExtractor, BraceScanExtractor};
pub use rewrite::ReferenceRewriter;

use patterns::patterns;

/// Characters kept in before/after log previews.
const PREVIEW_CHARS: usize = 100;

static DEFAULT_NORMALIZER: LazyLock<Normalizer> = LazyLock::new(Normalizer::default);

// ============================================================================
// Normalizer
// ============================================================================

/// Normalization pipeline with a pluggable body extractor.
#[derive(Debug, Clone)]
pub struct Normalizer<E = BraceScanExtractor> {
    extractor: E,
    rewriter: ReferenceRewriter,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&NormalizeConfig::default())
    }
}

impl Normalizer {
    pub fn new(config: &NormalizeConfig) -> Self {
        Self::with_extractor(config, BraceScanExtractor)
    }
}

impl<E: BodyExtractor> Normalizer<E> {
    pub fn with_extractor(config: &NormalizeConfig, extractor: E) -> Self {
        Self {
            extractor,
            rewriter: ReferenceRewriter::new(config),
        }
    }

    pub fn rewriter(&self) -> &ReferenceRewriter {
        &self.rewriter
    }

    /// Return whether `fragment` would be changed by [`normalize`](Self::normalize).
    ///
    /// True for imports, declaration calls, bare user-type constructions, and non-canonical whitespace. A `false`
    /// answer guarantees `normalize(fragment) == fragment`.
    pub fn needs_cleaning(&self, fragment: &str) -> bool {
        let p = patterns();
        p.import_line.is_match(fragment)
            || p.declaration_call.is_match(fragment)
            || self.rewriter.would_rewrite(fragment)
            || whitespace::canonicalize(fragment) != fragment
    }

    /// Reduce `fragment` to an embeddable test body.
    #[tracing::instrument(skip_all, fields(fragment_len = fragment.len()))]
    pub fn normalize(&self, fragment: &str) -> String {
        let mut current = fragment.to_string();
        let mut passes = 0usize;

        // Each changing pass removes a wrapper, an import, or whitespace; qualification happens once per name.
        loop {
            let next = self.normalize_once(&current);
            passes += 1;
            if next == current {
                break;
            }
            current = next;
        }

        if current != fragment {
            tracing::debug!(
                passes,
                before = %preview(fragment),
                after = %preview(&current),
                "normalized test body"
            );
        }
        current
    }

    /// Return the body the extractor selects, after import stripping.
    pub fn extract_body(&self, fragment: &str) -> Option<String> {
        self.extractor.extract(fragment)
    }

    fn normalize_once(&self, text: &str) -> String {
        let stripped = extract::strip_imports(text);
        let body = match self.extractor.extract(&stripped) {
            Some(body) => self.peel(body),
            None => strip_wrappers(&stripped),
        };
        whitespace::canonicalize(&self.rewriter.rewrite(&body))
    }

    /// Keep extracting from `body` until no nested block remains, so any nesting depth costs one pass.
    fn peel(&self, mut body: String) -> String {
        while let Some(inner) = self.extractor.extract(&body) {
            // An extractor that does not shrink its input would never stop.
            if inner.len() >= body.len() {
                break;
            }
            body = inner;
        }
        body
    }
}

/// Shallow pass for fragments the extractor rejects: drop declaration openers that start a line, then one
/// trailing `})` / `});` per opener removed.
fn strip_wrappers(text: &str) -> String {
    let p = patterns();
    let openers = p.wrapper_opener.find_iter(text).count();
    if openers == 0 {
        return text.to_string();
    }

    let mut out = p.wrapper_opener.replace_all(text, "").into_owned();
    for _ in 0..openers {
        match p.wrapper_closer.find(&out) {
            Some(m) => out.truncate(m.start()),
            None => break,
        }
    }
    out
}

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().nth(PREVIEW_CHARS).is_some() {
        out.push_str("...");
    }
    out
}

// ============================================================================
// Default-configured entry points
// ============================================================================

/// [`Normalizer::normalize`] with the default alias and allow-list.
pub fn normalize(fragment: &str) -> String {
    DEFAULT_NORMALIZER.normalize(fragment)
}

/// [`Normalizer::needs_cleaning`] with the default alias and allow-list.
pub fn needs_cleaning(fragment: &str) -> bool {
    DEFAULT_NORMALIZER.needs_cleaning(fragment)
}

/// Body of the last case block (or first suite block), `None` when absent or unbalanced.
pub fn extract_body(fragment: &str) -> Option<String> {
    DEFAULT_NORMALIZER.extract_body(fragment)
}

/// [`ReferenceRewriter::rewrite`] with the default alias and allow-list.
pub fn rewrite_references(body: &str) -> String {
    DEFAULT_NORMALIZER.rewriter().rewrite(body)
}
