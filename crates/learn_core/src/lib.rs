#![forbid(unsafe_code)]
//! Provide the canonical vocabulary shared by the `learn` normalizer and test harness.
//!
//! This crate is intentionally small and dependency-free. It holds the word lists that the rest of the
//! workspace must agree on:
//! - the test-framework declaration calls that a test body must not retain (`describe`, `it`, `test`),
//! - the built-in constructors that must never be routed through the solution namespace,
//! - the glyphs and separators a verbose test reporter prints for passing and failing tests.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global mutable state, no regexes.
//! - Callers build their own matchers from these tables; the tables only provide spellings and metadata.

pub mod lang;
