//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT call sleep methods.
//! **Exceptions**: the typewriter scheduler in `typewriter/effect.rs` (each
//! tick waits its interval) and frame rate limiting in `tui/src/app.rs`.

use architectural_enforcement::{context_mentions, production_sources, SourceFile};

/// Test that production code does not contain sleep() calls
#[test]
fn test_no_sleep_in_production_code() {
    let violations: Vec<String> = production_sources()
        .iter()
        .flat_map(find_sleep_violations)
        .collect();

    if !violations.is_empty() {
        eprintln!("\n❌ Sleep calls found in production code!\n");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\n✅ ACCEPTABLE sleep uses:");
        eprintln!("  - Typewriter tick scheduling (novacloud/core/src/typewriter/effect.rs)");
        eprintln!("  - Frame rate limiting in TUI (tui/src/app.rs)");
        eprintln!("  - Periodic tasks using tokio::time::interval()");

        panic!(
            "\nFound {} sleep violation(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}

fn find_sleep_violations(file: &SourceFile) -> Vec<String> {
    let mut violations = Vec::new();

    for (idx, code) in file.production_lines() {
        if !(code.contains("::sleep(") || code.contains(".sleep(")) {
            continue;
        }

        if file.is("novacloud/core/src/typewriter/effect.rs")
            && context_mentions(&file.lines, idx, 10, 3, &["delay", "tick"])
        {
            continue;
        }

        if file.is("tui/src/app.rs") && context_mentions(&file.lines, idx, 10, 3, &["frame", "fps"])
        {
            continue;
        }

        violations.push(format!(
            "{}:{} - {}",
            file.display_path(),
            idx + 1,
            file.lines[idx].trim()
        ));
    }

    violations
}

#[test]
fn test_sleep_violation_detection() {
    let file = SourceFile {
        path: "novacloud/core/src/theme.rs".into(),
        lines: vec![
            "fn bad_function() {".to_string(),
            "    std::thread::sleep(Duration::from_millis(10));".to_string(),
            "}".to_string(),
        ],
    };
    assert_eq!(find_sleep_violations(&file).len(), 1);
}

#[test]
fn test_sleep_in_test_region_ignored() {
    let file = SourceFile {
        path: "novacloud/core/src/theme.rs".into(),
        lines: vec![
            "#[cfg(test)]".to_string(),
            "mod tests {".to_string(),
            "    async fn t() { tokio::time::sleep(d).await; }".to_string(),
            "}".to_string(),
        ],
    };
    assert!(find_sleep_violations(&file).is_empty());
}
