//! Integration Test: Blocking I/O Prohibition
//!
//! **Policy**: async functions MUST NOT touch `std::fs`. File access (config,
//! preferences, log file) happens in plain functions that run before the
//! event loop or from key handlers on small files.

use architectural_enforcement::{is_in_async_function, production_sources, SourceFile};

#[test]
fn test_no_blocking_fs_in_async_functions() {
    let violations: Vec<String> = production_sources()
        .iter()
        .flat_map(find_blocking_io_violations)
        .collect();

    if !violations.is_empty() {
        eprintln!("\n❌ Blocking file I/O found inside async functions!\n");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\n✅ Move the file access into a sync helper called before the runtime work,");
        eprintln!("   or use tokio::fs.");

        panic!(
            "\nFound {} blocking I/O violation(s).",
            violations.len()
        );
    }
}

fn find_blocking_io_violations(file: &SourceFile) -> Vec<String> {
    file.production_lines()
        .filter(|(_, code)| code.contains("std::fs::") || code.contains("fs::read") || code.contains("fs::write") || code.contains("File::create"))
        .filter(|(idx, _)| is_in_async_function(&file.lines, *idx))
        .map(|(idx, _)| {
            format!(
                "{}:{} - {}",
                file.display_path(),
                idx + 1,
                file.lines[idx].trim()
            )
        })
        .collect()
}

#[test]
fn test_blocking_io_detection() {
    let file = SourceFile {
        path: "tui/src/app.rs".into(),
        lines: vec![
            "    pub async fn run(&mut self) {".to_string(),
            "        let s = std::fs::read_to_string(\"f\");".to_string(),
            "    }".to_string(),
            "    fn load() {".to_string(),
            "        let s = std::fs::read_to_string(\"f\");".to_string(),
            "    }".to_string(),
        ],
    };
    let found = find_blocking_io_violations(&file);
    assert_eq!(found.len(), 1);
    assert!(found[0].contains(":2 "));
}
