//! Verbose test-reporter vocabulary.
//!
//! The harness reads the human-oriented output of a verbose test reporter. The lines it cares about are
//! recognized by glyphs (`✓`, `×`, ...) and a hierarchy separator between file, suite, and test names
//! (`tests/solution.test.ts > Queue > starts empty`).
//!
//! ## Notes
//! - Reporters differ across versions and terminals (`×` vs `✗`, `>` vs `›`), so each marker carries aliases.
//! - Matching is substring-based and **case-sensitive**.
//!
//! ## Examples
//! ```rust
//! use learn_core::lang::reporter::{self, MarkerId};
//!
//! assert!(reporter::contains(MarkerId::Passed, " ✓ a.test.ts > works 1ms"));
//! assert!(reporter::contains(MarkerId::Failed, " FAIL  a.test.ts > breaks"));
//! assert_eq!(reporter::as_str(MarkerId::Separator), ">");
//! ```

use super::registry::{LangItemInfo, Origin, Stability};

/// Stable identifier for a reporter marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerId {
    /// Prefix of a passing test line.
    Passed,
    /// Prefix of a failing test line (listing or failure summary).
    Failed,
    /// Separator between file, suite, and test names.
    Separator,
    /// Prefix of the inline failure message printed under a failing test.
    Arrow,
}

/// Metadata for a reporter marker.
pub type MarkerInfo = LangItemInfo<MarkerId>;

/// Registry of all reporter markers.
pub const MARKERS: &[MarkerInfo] = &[
    marker(MarkerId::Passed, "✓", &["√", "✔"], "Glyph printed before a passing test."),
    marker(
        MarkerId::Failed,
        "×",
        &["✗", "✕", "✖", "FAIL"],
        "Glyph or label printed before a failing test.",
    ),
    marker(
        MarkerId::Separator,
        ">",
        &["›"],
        "Separator between file, suite, and test names.",
    ),
    marker(MarkerId::Arrow, "→", &[], "Prefix of an inline failure message."),
];

/// Label prefixing an assertion failure message.
pub const ASSERTION_ERROR_PREFIX: &str = "AssertionError:";

/// Error type names recognized as a last-resort failure message (`TypeError: x is not a function`).
pub const TYPED_ERRORS: &[&str] = &["TypeError", "ReferenceError", "Error"];

/// Header labels of a diff block (`- Expected` / `+ Received`), which carry no value themselves.
pub const DIFF_HEADERS: &[&str] = &["Expected", "Received"];

/// Substrings that mark a line as describing an error when nothing else could be parsed.
pub const ERROR_INDICATORS: &[&str] = &["Error", "error", "ERR!"];

/// Return the canonical spelling for a marker.
pub fn as_str(id: MarkerId) -> &'static str {
    info_for(id).canonical
}

/// Return every spelling (canonical first) for a marker.
pub fn spellings(id: MarkerId) -> impl Iterator<Item = &'static str> {
    let info = info_for(id);
    std::iter::once(info.canonical).chain(info.aliases.iter().copied())
}

/// Return whether `line` contains any spelling of the marker.
pub fn contains(id: MarkerId, line: &str) -> bool {
    spellings(id).any(|s| line.contains(s))
}

/// Return the full metadata entry for a marker.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: MarkerId) -> &'static MarkerInfo {
    MARKERS
        .iter()
        .find(|m| m.id == id)
        .expect("marker info missing")
}

/// Resolve a spelling to a marker identifier.
pub fn from_str(spelling: &str) -> Option<MarkerId> {
    MARKERS
        .iter()
        .find(|m| m.spellings().any(|s| s == spelling))
        .map(|m| m.id)
}

const fn marker(
    id: MarkerId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> MarkerInfo {
    LangItemInfo {
        id,
        canonical,
        aliases,
        description,
        origin: Origin::Reporter,
        stability: Stability::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_variants() {
        for line in [" × a > b", " ✗ a > b", " ✕ a > b", " ✖ a > b", " FAIL  a > b"] {
            assert!(contains(MarkerId::Failed, line), "{line}");
        }
    }

    #[test]
    fn test_separator_variants() {
        assert!(contains(MarkerId::Separator, "a > b"));
        assert!(contains(MarkerId::Separator, "a › b"));
        assert!(!contains(MarkerId::Separator, "a - b"));
    }

    #[test]
    fn test_from_str_resolves_aliases() {
        assert_eq!(from_str("✔"), Some(MarkerId::Passed));
        assert_eq!(from_str("FAIL"), Some(MarkerId::Failed));
        assert_eq!(from_str("PASS"), None);
    }
}
