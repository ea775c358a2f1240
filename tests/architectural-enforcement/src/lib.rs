//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - The engine never sleeps; only a surface waits, and only on deadlines
//! - The engine has no UI or async-runtime dependencies
//!
//! The helpers here scan workspace sources line by line. They are textual on
//! purpose: a violation should be visible to anyone grepping for it.

use std::fs;
use std::path::{Path, PathBuf};

/// A matching source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub line: usize,
    pub text: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} - {}", self.path.display(), self.line, self.text)
    }
}

/// Workspace root (two levels above this package)
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// All `.rs` files under `dir` (relative to the workspace root)
pub fn rust_sources(dir: &str) -> Vec<PathBuf> {
    let root = workspace_root().join(dir);
    assert!(root.exists(), "expected source directory {}", root.display());

    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Code portion of a line (everything before `//`)
pub fn code_part(line: &str) -> &str {
    line.split("//").next().unwrap_or(line)
}

/// Lines of `dir` whose code portion satisfies `matches`
///
/// Lines after a `#[cfg(test)]` marker are skipped; test modules sit at the
/// end of each file.
pub fn scan(dir: &str, matches: impl Fn(&str) -> bool) -> Vec<Violation> {
    let mut violations = Vec::new();
    for path in rust_sources(dir) {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        violations.extend(scan_source(&path, &content, &matches));
    }
    violations
}

/// [`scan`] for a single file's contents
pub fn scan_source(path: &Path, content: &str, matches: impl Fn(&str) -> bool) -> Vec<Violation> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .filter(|(_, line)| matches(code_part(line)))
        .map(|(idx, line)| Violation {
            path: path.to_path_buf(),
            line: idx + 1,
            text: line.trim().to_string(),
        })
        .collect()
}

/// Fail with every violation listed
pub fn assert_clean(what: &str, violations: &[Violation]) {
    if violations.is_empty() {
        return;
    }
    for v in violations {
        eprintln!("  ❌ {v}");
    }
    panic!("\nFound {} {what} violation(s).", violations.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_ignored() {
        assert_eq!(code_part("let x = 1; // sleep(5)"), "let x = 1; ");
        assert_eq!(code_part("/// std::thread::sleep(d)"), "");
    }

    #[test]
    fn test_scan_stops_at_test_module() {
        let source = "\
fn run() {
    std::thread::sleep(d);
}

#[cfg(test)]
mod tests {
    fn t() { std::thread::sleep(d); }
}";
        let found = scan_source(Path::new("x.rs"), source, |l| l.contains("::sleep("));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line, 2);
    }

    #[test]
    fn test_workspace_root_has_manifest() {
        assert!(workspace_root().join("Cargo.toml").exists());
        assert!(workspace_root().join("engine/core/src/lib.rs").exists());
    }
}
