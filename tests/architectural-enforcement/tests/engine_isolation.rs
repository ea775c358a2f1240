//! Integration Test: Engine Isolation
//!
//! **Policy**: `sortstep-core` is headless and synchronous. It must not
//! depend on a terminal library or an async runtime, so any surface (or a
//! plain test) can drive it.

use std::fs;

use architectural_enforcement::{assert_clean, scan, workspace_root};

const FORBIDDEN_CRATES: &[&str] = &["ratatui", "crossterm", "tokio", "futures"];

#[test]
fn test_engine_manifest_has_no_ui_deps() {
    let manifest = fs::read_to_string(workspace_root().join("engine/core/Cargo.toml"))
        .expect("engine manifest readable");

    let offending: Vec<&str> = manifest
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter(|line| {
            FORBIDDEN_CRATES.iter().any(|krate| {
                line.starts_with(&format!("{krate} ")) || line.starts_with(&format!("{krate}="))
            })
        })
        .collect();

    assert!(
        offending.is_empty(),
        "engine/core/Cargo.toml depends on UI or async crates: {offending:?}"
    );
}

#[test]
fn test_engine_sources_import_no_ui_crates() {
    let violations = scan("engine/core/src", |code| {
        FORBIDDEN_CRATES.iter().any(|krate| {
            code.contains(&format!("use {krate}::")) || code.contains(&format!("{krate}::"))
        })
    });
    assert_clean("engine import", &violations);
}

#[test]
fn test_engine_spawns_no_threads() {
    let violations = scan("engine/core/src", |code| {
        code.contains("thread::spawn") || code.contains("std::thread")
    });
    assert_clean("engine thread", &violations);
}
