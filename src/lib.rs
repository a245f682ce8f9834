#![forbid(unsafe_code)]
//! Test-body normalization and test-run harness for generated programming lessons.
//!
//! Lessons come with unit tests written by a language model. This crate turns those fragments into clean test
//! bodies (`normalize`), assembles them into test files (`suite`), and runs the files with an external runner,
//! parsing its output into per-test outcomes (`harness`).
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (for example a constant regex that fails to compile), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod cli;
pub mod harness;
pub mod normalize;
pub mod suite;
pub mod version;

pub use harness::{ExecutionResult, Harness, HarnessConfig, TestOutcome, run_tests};
pub use normalize::{NormalizeConfig, Normalizer, extract_body, needs_cleaning, normalize, rewrite_references};
pub use suite::{TestCase, fix_test_file, render_suite};
