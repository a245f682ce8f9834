//! Normalization configuration

use learn_core::lang::constructors;

/// Namespace through which generated test files import the learner's solution.
pub const DEFAULT_NAMESPACE_ALIAS: &str = "solution";

/// Normalization configuration
#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    /// Identifier that user-defined constructors are routed through (`new solution.Queue()`)
    pub alias: String,
    /// Constructors to leave bare in addition to the built-in registry
    pub extra_builtins: Vec<String>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            alias: DEFAULT_NAMESPACE_ALIAS.to_string(),
            extra_builtins: Vec::new(),
        }
    }
}

impl NormalizeConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Exempt one more constructor name from rewriting
    pub fn with_builtin(mut self, name: impl Into<String>) -> Self {
        self.extra_builtins.push(name.into());
        self
    }

    /// Every constructor name the rewriter must leave untouched.
    pub fn builtins(&self) -> impl Iterator<Item = &str> {
        constructors::names()
            .map(|name| -> &str { name })
            .chain(self.extra_builtins.iter().map(String::as_str))
    }
}

/// Return whether `alias` can stand in front of `.Name` in generated code.
pub fn is_valid_alias(alias: &str) -> bool {
    let mut chars = alias.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
