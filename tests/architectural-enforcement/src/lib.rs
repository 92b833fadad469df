//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - No sleep() outside the typewriter scheduler and TUI frame limiting
//! - No panicking unwrap/expect in production code
//! - No blocking file I/O inside async functions
//!
//! The helpers here walk the workspace sources line by line. They are
//! heuristics over text, not a Rust parser.

use std::fs;
use std::path::{Path, PathBuf};

/// Production source trees checked by every test
pub const PRODUCTION_DIRS: &[&str] = &["novacloud/core/src", "tui/src"];

/// A Rust source file split into lines
pub struct SourceFile {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl SourceFile {
    /// Path relative to the workspace root, for violation messages
    pub fn display_path(&self) -> String {
        self.path
            .strip_prefix(workspace_root())
            .unwrap_or(&self.path)
            .display()
            .to_string()
    }

    /// Whether the file path ends with `suffix` (e.g. `tui/src/app.rs`)
    pub fn is(&self, suffix: &str) -> bool {
        self.path.ends_with(suffix)
    }

    /// Index of the first line of the `#[cfg(test)]` region, or `lines.len()`
    pub fn test_region_start(&self) -> usize {
        self.lines
            .iter()
            .position(|l| l.trim_start().starts_with("#[cfg(test)]"))
            .unwrap_or(self.lines.len())
    }

    /// Non-comment, non-test lines as `(index, code)` pairs
    pub fn production_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        let end = self.test_region_start();
        self.lines[..end]
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim_start().starts_with("//"))
            .map(|(idx, line)| (idx, code_part(line)))
    }
}

/// Workspace root (two levels above this crate)
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .canonicalize()
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("../.."))
}

/// All `.rs` files under `dir` (relative to the workspace root)
pub fn rust_sources(dir: &str) -> Vec<SourceFile> {
    let root = workspace_root().join(dir);
    if !root.exists() {
        return Vec::new();
    }

    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .filter_map(|e| {
            let content = fs::read_to_string(e.path()).ok()?;
            Some(SourceFile {
                path: e.path().to_path_buf(),
                lines: content.lines().map(str::to_owned).collect(),
            })
        })
        .collect()
}

/// Every production source file in the workspace
pub fn production_sources() -> Vec<SourceFile> {
    PRODUCTION_DIRS.iter().flat_map(|d| rust_sources(d)).collect()
}

/// Strip a trailing `//` comment
pub fn code_part(line: &str) -> &str {
    line.split("//").next().unwrap_or(line)
}

/// Signature line of the function enclosing `current_idx`, if any
pub fn enclosing_fn<S: AsRef<str>>(lines: &[S], current_idx: usize) -> Option<&str> {
    for i in (0..=current_idx.min(lines.len().saturating_sub(1))).rev() {
        let line = lines[i].as_ref().trim();
        if line.starts_with("//") {
            continue;
        }
        if line.starts_with("fn ") || line.contains(" fn ") {
            return Some(line);
        }
        // Stop at module/impl boundaries
        if line.starts_with("mod ") || (line.starts_with("impl") && line.contains('{')) {
            return None;
        }
    }
    None
}

/// Whether `current_idx` sits inside an `async fn`
pub fn is_in_async_function<S: AsRef<str>>(lines: &[S], current_idx: usize) -> bool {
    enclosing_fn(lines, current_idx).is_some_and(|sig| sig.contains("async fn "))
}

/// Whether any line within `before` lines above or `after` below mentions one of `words`
pub fn context_mentions<S: AsRef<str>>(
    lines: &[S],
    current_idx: usize,
    before: usize,
    after: usize,
    words: &[&str],
) -> bool {
    let range = current_idx.saturating_sub(before)..(current_idx + after).min(lines.len());
    lines[range].iter().any(|line| {
        let line = line.as_ref().to_lowercase();
        words.iter().any(|w| line.contains(w))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_function_detection() {
        let code = [
            "    pub async fn run(&mut self) {",
            "        let contents = std::fs::read_to_string(\"file.txt\");",
            "    }",
        ];
        assert!(is_in_async_function(&code, 1));
    }

    #[test]
    fn test_sync_function_detection() {
        let code = [
            "fn load() {",
            "    let contents = std::fs::read_to_string(\"config.toml\");",
            "}",
        ];
        assert!(!is_in_async_function(&code, 1));
        assert_eq!(enclosing_fn(&code, 1), Some("fn load() {"));
    }

    #[test]
    fn test_code_part_strips_comment() {
        assert_eq!(code_part("let x = 1; // .unwrap()"), "let x = 1; ");
    }

    #[test]
    fn test_context_mentions() {
        let code = ["// frame budget", "x", "tokio::time::sleep(d).await;"];
        assert!(context_mentions(&code, 2, 5, 1, &["frame"]));
        assert!(!context_mentions(&code, 2, 0, 1, &["frame"]));
    }

    #[test]
    fn test_workspace_sources_found() {
        let files = production_sources();
        assert!(files.iter().any(|f| f.is("novacloud/core/src/lib.rs")));
        assert!(files.iter().any(|f| f.is("tui/src/app.rs")));
    }
}
