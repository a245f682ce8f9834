//! Test-framework declaration vocabulary.
//!
//! A generated test body must not contain the calls that declare suites and cases; the surrounding file
//! supplies those. This module is the single source of truth for those call names.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `.only` / `.skip` style modifiers are listed separately in [`MODIFIERS`]; they are not declarations.
//!
//! ## Examples
//! ```rust
//! use learn_core::lang::declarations::{self, DeclarationId, DeclarationKind};
//!
//! assert_eq!(declarations::from_str("test"), Some(DeclarationId::Test));
//! assert_eq!(declarations::kind(DeclarationId::Describe), DeclarationKind::Suite);
//! assert!(declarations::case_keywords().any(|k| k == "it"));
//! ```

use super::registry::{LangItemInfo, Origin, Stability};

/// Stable identifier for a declaration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationId {
    Describe,
    It,
    Test,
}

/// Whether a declaration groups cases or holds assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// Groups cases (`describe`).
    Suite,
    /// Holds one test body (`it`, `test`).
    Case,
}

/// Metadata for a declaration call.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationInfo {
    pub info: LangItemInfo<DeclarationId>,
    pub kind: DeclarationKind,
}

/// Registry of all declaration calls.
pub const DECLARATIONS: &[DeclarationInfo] = &[
    decl(
        DeclarationId::Describe,
        "describe",
        DeclarationKind::Suite,
        "Group related test cases under a title.",
    ),
    decl(
        DeclarationId::It,
        "it",
        DeclarationKind::Case,
        "Declare one test case with a title and a callback.",
    ),
    decl(
        DeclarationId::Test,
        "test",
        DeclarationKind::Case,
        "Alias-style spelling of `it` with identical semantics.",
    ),
];

/// Chained modifiers accepted between a declaration name and its argument list (`it.only(...)`).
pub const MODIFIERS: &[&str] = &["only", "skip", "todo", "concurrent", "fails"];

/// Return the canonical spelling for a declaration call.
///
/// ## Examples
/// ```rust
/// use learn_core::lang::declarations::{self, DeclarationId};
///
/// assert_eq!(declarations::as_str(DeclarationId::It), "it");
/// ```
pub fn as_str(id: DeclarationId) -> &'static str {
    info_for(id).info.canonical
}

/// Return whether a declaration is a suite or a case.
pub fn kind(id: DeclarationId) -> DeclarationKind {
    info_for(id).kind
}

/// Return the full metadata entry for a declaration call.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: DeclarationId) -> &'static DeclarationInfo {
    DECLARATIONS
        .iter()
        .find(|d| d.info.id == id)
        .expect("declaration info missing")
}

/// Resolve a spelling to a declaration identifier.
///
/// ## Returns
/// - `Some(DeclarationId)` if `name` matches a canonical spelling or alias.
/// - `None` otherwise.
pub fn from_str(name: &str) -> Option<DeclarationId> {
    DECLARATIONS
        .iter()
        .find(|d| d.info.spellings().any(|s| s == name))
        .map(|d| d.info.id)
}

/// Iterate over every spelling of every suite declaration.
pub fn suite_keywords() -> impl Iterator<Item = &'static str> {
    keywords_of(DeclarationKind::Suite)
}

/// Iterate over every spelling of every case declaration.
pub fn case_keywords() -> impl Iterator<Item = &'static str> {
    keywords_of(DeclarationKind::Case)
}

/// Iterate over every spelling of every declaration, suites first.
pub fn all_keywords() -> impl Iterator<Item = &'static str> {
    suite_keywords().chain(case_keywords())
}

fn keywords_of(kind: DeclarationKind) -> impl Iterator<Item = &'static str> {
    DECLARATIONS
        .iter()
        .filter(move |d| d.kind == kind)
        .flat_map(|d| std::iter::once(d.info.canonical).chain(d.info.aliases.iter().copied()))
}

const fn decl(
    id: DeclarationId,
    canonical: &'static str,
    kind: DeclarationKind,
    description: &'static str,
) -> DeclarationInfo {
    DeclarationInfo {
        info: LangItemInfo {
            id,
            canonical,
            aliases: &[],
            description,
            origin: Origin::TestFramework,
            stability: Stability::Stable,
        },
        kind,
    }
}
