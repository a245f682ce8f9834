//! Layering guardrails.
//!
//! - `learn_core` holds vocabulary only and must stay free of dependencies, so every other crate can use it.
//! - Normalization is pure and synchronous; it must not reach for the async runtime, which belongs to the harness.

use std::fs;
use std::path::{Path, PathBuf};

/// Return the non-comment lines of one `[table]` in a manifest.
fn table_entries<'a>(manifest: &'a str, table: &str) -> Vec<&'a str> {
    let mut inside = false;
    let mut entries = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the table.
        if line.starts_with('[') {
            inside = line == table;
            continue;
        }
        if !inside || line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Strip inline comments for robustness.
        let entry = line.split('#').next().unwrap_or("").trim();
        if !entry.is_empty() {
            entries.push(entry);
        }
    }
    entries
}

#[test]
fn core_vocabulary_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/learn_core/Cargo.toml");
    let deps = table_entries(manifest, "[dependencies]");
    assert!(
        deps.is_empty(),
        "`learn_core` must not have [dependencies], found: {deps:?}"
    );
}

#[test]
fn async_runtime_is_a_main_dependency() {
    let manifest = include_str!("../Cargo.toml");
    let deps = table_entries(manifest, "[dependencies]");
    assert!(deps.iter().any(|d| d.starts_with("tokio")), "harness needs tokio");
}

/// Collect every `.rs` file under `dir` that mentions the async runtime.
fn files_using_tokio(dir: &Path, found: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            files_using_tokio(&path, found);
        } else if path.extension().is_some_and(|ext| ext == "rs")
            && fs::read_to_string(&path).is_ok_and(|src| src.contains("tokio"))
        {
            found.push(path);
        }
    }
}

#[test]
fn async_runtime_is_used_only_by_the_harness_and_its_command() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let src = root.join("src");
    let mut found = Vec::new();
    files_using_tokio(&src, &mut found);

    // The `run` command owns the runtime that drives the harness.
    let allowed = |path: &Path| path.starts_with(src.join("harness")) || path == src.join("cli/commands.rs");
    let offenders: Vec<_> = found.iter().filter(|p| !allowed(p.as_path())).collect();
    assert!(offenders.is_empty(), "tokio used outside the harness: {offenders:?}");
    assert!(!found.is_empty(), "the harness should spawn runners through tokio");
}

#[test]
fn normalizer_does_not_use_async_runtime() {
    let sources = [
        include_str!("../src/normalize/mod.rs"),
        include_str!("../src/normalize/config.rs"),
        include_str!("../src/normalize/extract.rs"),
        include_str!("../src/normalize/patterns.rs"),
        include_str!("../src/normalize/rewrite.rs"),
        include_str!("../src/normalize/whitespace.rs"),
        include_str!("../src/suite/mod.rs"),
        include_str!("../src/suite/repair.rs"),
    ];
    for source in sources {
        assert!(!source.contains("tokio"), "normalization and suite code must stay synchronous");
        assert!(!source.contains("async fn"), "normalization and suite code must stay synchronous");
        assert!(!source.contains("crate::harness"), "normalization must not depend on the harness");
    }
}
