//! Built-in constructor vocabulary.
//!
//! Generated tests reach the learner's own classes through a namespace alias (`new solution.Queue()`), but
//! global constructors such as `Map` or `Promise` must stay bare. This module lists every global constructor
//! that the reference rewriter has to leave alone.
//!
//! ## Notes
//! - The list is closed: it is configuration data, not something user input can extend at runtime.
//! - Lookup via [`is_builtin`] is **case-sensitive**.
//!
//! ## Examples
//! ```rust
//! use learn_core::lang::constructors::{self, ConstructorCategory};
//!
//! assert!(constructors::is_builtin("Promise"));
//! assert!(!constructors::is_builtin("Queue"));
//! assert_eq!(constructors::category("Uint8Array"), Some(ConstructorCategory::TypedArray));
//! ```

use super::registry::Origin;

/// Broad grouping for built-in constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructorCategory {
    /// Fundamental objects (`Object`, `Array`, `Date`, ...).
    Core,
    /// Keyed and set collections (`Map`, `Set`, `WeakMap`, ...).
    Collection,
    /// Control abstractions (`Promise`, `Proxy`, `WeakRef`, ...).
    Control,
    /// `Error` and its subclasses.
    Error,
    /// Typed array views.
    TypedArray,
    /// Raw binary buffers and views.
    Binary,
    /// Web platform / fetch / events / encoding globals.
    Web,
}

/// Metadata for a built-in constructor.
#[derive(Debug, Clone, Copy)]
pub struct ConstructorInfo {
    pub name: &'static str,
    pub category: ConstructorCategory,
    pub origin: Origin,
}

/// Registry of all built-in constructors exempt from namespace rewriting.
pub const BUILTIN_CONSTRUCTORS: &[ConstructorInfo] = &[
    // Core
    ecma("Object", ConstructorCategory::Core),
    ecma("Array", ConstructorCategory::Core),
    ecma("Date", ConstructorCategory::Core),
    ecma("RegExp", ConstructorCategory::Core),
    ecma("Number", ConstructorCategory::Core),
    ecma("String", ConstructorCategory::Core),
    ecma("Boolean", ConstructorCategory::Core),
    ecma("Function", ConstructorCategory::Core),
    // Collections
    ecma("Map", ConstructorCategory::Collection),
    ecma("Set", ConstructorCategory::Collection),
    ecma("WeakMap", ConstructorCategory::Collection),
    ecma("WeakSet", ConstructorCategory::Collection),
    // Control
    ecma("Promise", ConstructorCategory::Control),
    ecma("Proxy", ConstructorCategory::Control),
    ecma("WeakRef", ConstructorCategory::Control),
    ecma("FinalizationRegistry", ConstructorCategory::Control),
    // Errors
    ecma("Error", ConstructorCategory::Error),
    ecma("TypeError", ConstructorCategory::Error),
    ecma("RangeError", ConstructorCategory::Error),
    ecma("SyntaxError", ConstructorCategory::Error),
    ecma("ReferenceError", ConstructorCategory::Error),
    ecma("EvalError", ConstructorCategory::Error),
    ecma("URIError", ConstructorCategory::Error),
    ecma("AggregateError", ConstructorCategory::Error),
    // Typed arrays
    ecma("Int8Array", ConstructorCategory::TypedArray),
    ecma("Uint8Array", ConstructorCategory::TypedArray),
    ecma("Uint8ClampedArray", ConstructorCategory::TypedArray),
    ecma("Int16Array", ConstructorCategory::TypedArray),
    ecma("Uint16Array", ConstructorCategory::TypedArray),
    ecma("Int32Array", ConstructorCategory::TypedArray),
    ecma("Uint32Array", ConstructorCategory::TypedArray),
    ecma("Float32Array", ConstructorCategory::TypedArray),
    ecma("Float64Array", ConstructorCategory::TypedArray),
    ecma("BigInt64Array", ConstructorCategory::TypedArray),
    ecma("BigUint64Array", ConstructorCategory::TypedArray),
    // Binary
    ecma("ArrayBuffer", ConstructorCategory::Binary),
    ecma("SharedArrayBuffer", ConstructorCategory::Binary),
    ecma("DataView", ConstructorCategory::Binary),
    // Web platform
    web("URL"),
    web("URLSearchParams"),
    web("FormData"),
    web("Blob"),
    web("File"),
    web("Headers"),
    web("Request"),
    web("Response"),
    web("AbortController"),
    web("AbortSignal"),
    web("Event"),
    web("EventTarget"),
    web("CustomEvent"),
    web("MessageChannel"),
    web("ReadableStream"),
    web("WritableStream"),
    web("TransformStream"),
    web("TextEncoder"),
    web("TextDecoder"),
];

/// Return whether `name` is a built-in constructor.
pub fn is_builtin(name: &str) -> bool {
    lookup(name).is_some()
}

/// Return the category of a built-in constructor, or `None` for anything else.
pub fn category(name: &str) -> Option<ConstructorCategory> {
    lookup(name).map(|c| c.category)
}

/// Iterate over every built-in constructor name.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTIN_CONSTRUCTORS.iter().map(|c| c.name)
}

fn lookup(name: &str) -> Option<&'static ConstructorInfo> {
    BUILTIN_CONSTRUCTORS.iter().find(|c| c.name == name)
}

const fn ecma(name: &'static str, category: ConstructorCategory) -> ConstructorInfo {
    ConstructorInfo {
        name,
        category,
        origin: Origin::Ecma,
    }
}

const fn web(name: &'static str) -> ConstructorInfo {
    ConstructorInfo {
        name,
        category: ConstructorCategory::Web,
        origin: Origin::Web,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_starts_uppercase() {
        for name in names() {
            assert!(
                name.chars().next().is_some_and(|c| c.is_ascii_uppercase()),
                "{name} would never match a constructor rewrite"
            );
        }
    }

    #[test]
    fn test_error_subtypes_are_errors() {
        for name in ["Error", "TypeError", "RangeError", "SyntaxError"] {
            assert_eq!(category(name), Some(ConstructorCategory::Error));
        }
    }

    #[test]
    fn test_user_types_are_not_builtin() {
        assert!(!is_builtin("Queue"));
        assert!(!is_builtin("LinkedListQueue"));
        assert!(!is_builtin("map"));
    }
}
