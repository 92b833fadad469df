//! Integration Test: Panic Prohibition
//!
//! **Policy**: Production code propagates errors with `?` instead of calling
//! `.unwrap()` or `.expect(..)`. Test modules are exempt.

use architectural_enforcement::{production_sources, SourceFile};

#[test]
fn test_no_unwrap_or_expect_in_production_code() {
    let violations: Vec<String> = production_sources()
        .iter()
        .flat_map(find_panic_violations)
        .collect();

    if !violations.is_empty() {
        eprintln!("\n❌ Panicking calls found in production code!\n");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\n✅ Use `?`, `unwrap_or`, `unwrap_or_default` or match instead.");

        panic!(
            "\nFound {} unwrap/expect call(s) in production code.",
            violations.len()
        );
    }
}

fn find_panic_violations(file: &SourceFile) -> Vec<String> {
    file.production_lines()
        .filter(|(_, code)| code.contains(".unwrap()") || code.contains(".expect("))
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
fn test_unwrap_detection() {
    let file = SourceFile {
        path: "tui/src/app.rs".into(),
        lines: vec![
            "fn f() {".to_string(),
            "    let a = x.unwrap();".to_string(),
            "    let b = y.unwrap_or(0);".to_string(),
            "    // z.expect(\"doc\")".to_string(),
            "}".to_string(),
        ],
    };
    let found = find_panic_violations(&file);
    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("let a = x.unwrap();"));
}
