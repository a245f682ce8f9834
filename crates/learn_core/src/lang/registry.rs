//! Shareable metadata for `learn_core::lang` registries.
//!
//! Every vocabulary in `learn_core::lang` is a `const` table of small, `Copy` metadata records. This submodule
//! provides the record shape reused across those tables.
//!
//! ## See also
//! - [`crate::lang::declarations`]
//! - [`crate::lang::reporter`]

/// Identify which ecosystem a spelling comes from.
///
/// ## Notes
/// - Used for docs and guardrail messages only; matching never depends on it.
///
/// ## Examples
/// ```rust
/// use learn_core::lang::registry::Origin;
///
/// assert_ne!(Origin::Ecma, Origin::Web);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// ECMAScript language built-ins (`Map`, `Promise`, typed arrays, ...).
    Ecma,
    /// Web platform / WinterCG globals (`URL`, `Headers`, `TextEncoder`, ...).
    Web,
    /// Test framework globals (`describe`, `it`, `test`).
    TestFramework,
    /// Test reporter output (glyphs and separators).
    Reporter,
}

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Examples
/// ```rust
/// use learn_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Deprecated,
}

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description`)
/// - provenance (`origin`, `stability`)
///
/// ## Notes
/// - `description` is mandatory to keep docs and guardrail output consistent.
/// - This type is `Copy` so it can live in `const` tables.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub origin: Origin,
    pub stability: Stability,
}

impl<Id> LangItemInfo<Id> {
    /// Iterate over the canonical spelling followed by every alias.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.canonical).chain(self.aliases.iter().copied())
    }
}
