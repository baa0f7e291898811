//! Hygiene — scans the builder crate's production sources for antipatterns.
//!
//! Each pattern has a budget of zero. Test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "panics on None/Err"),
    (".expect(", "panics on None/Err"),
    ("panic!(", "crashes the process"),
    ("unreachable!(", "crashes the process"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("#[allow(dead_code)]", "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        if path.extension().is_none_or(|e| e != "rs") {
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

#[test]
fn production_sources_are_free_of_forbidden_patterns() {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut violations = Vec::new();
    for (pattern, why) in FORBIDDEN {
        for file in &files {
            let count = file.content.lines().filter(|l| l.contains(pattern)).count();
            if count > 0 {
                violations.push(format!("  {}: {count}x {pattern} ({why})", file.path));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "forbidden patterns in production code:\n{}",
        violations.join("\n")
    );
}
