//! Reference rewriting
//!
//! Generated test files import the learner's module as a namespace (`import * as solution from ...`), so a bare
//! `new Queue()` in a test body has to become `new solution.Queue()`. Global constructors stay bare.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::config::NormalizeConfig;

/// `new` + whitespace, a capitalized bare identifier, then `(` or `<`.
///
/// Qualified names never match: the identifier must be followed directly by the argument list or type arguments,
/// so `new solution.Queue()` stops at the `.`.
static CONSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bnew(\s+)([A-Z][A-Za-z0-9_$]*)(\s*[<(])")
        .expect("INVARIANT: construction pattern is a constant")
});

/// Routes construction of user-defined types through a namespace alias.
#[derive(Debug, Clone)]
pub struct ReferenceRewriter {
    alias: String,
    builtins: HashSet<String>,
}

impl Default for ReferenceRewriter {
    fn default() -> Self {
        Self::new(&NormalizeConfig::default())
    }
}

impl ReferenceRewriter {
    pub fn new(config: &NormalizeConfig) -> Self {
        Self {
            alias: config.alias.clone(),
            builtins: config.builtins().map(str::to_string).collect(),
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Return whether `name` is exempt from rewriting.
    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }

    /// Qualify every bare, non-builtin construction in `body`.
    pub fn rewrite(&self, body: &str) -> String {
        CONSTRUCTION
            .replace_all(body, |caps: &Captures<'_>| {
                let name = &caps[2];
                if self.is_builtin(name) {
                    caps[0].to_string()
                } else {
                    format!("new{}{}.{}{}", &caps[1], self.alias, name, &caps[3])
                }
            })
            .into_owned()
    }

    /// Return whether [`rewrite`](Self::rewrite) would change `body`.
    pub fn would_rewrite(&self, body: &str) -> bool {
        CONSTRUCTION
            .captures_iter(body)
            .any(|caps| !self.is_builtin(&caps[2]))
    }
}
