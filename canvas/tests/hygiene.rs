//! Hygiene — enforces coding standards at test time.
//!
//! Scans the canvas crate's production sources for antipatterns. Every
//! pattern here is banned outright: the engine runs inside the browser's
//! input loop, so a stray panic or silently discarded error takes the whole
//! game down with it.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding sibling test files.
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

/// Assert that `pattern` appears nowhere in production sources.
fn assert_absent(pattern: &str, why: &str) {
    let hits: Vec<String> = source_files()
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(n, _)| format!("  {}:{}", file.path, n + 1))
                .collect::<Vec<_>>()
        })
        .collect();
    assert!(
        hits.is_empty(),
        "`{pattern}` is banned in canvas sources ({why}):\n{}",
        hits.join("\n")
    );
}

#[test]
fn no_unwrap_in_production_code() {
    assert_absent(".unwrap()", "panics crash the input loop");
}

#[test]
fn no_expect_in_production_code() {
    assert_absent(".expect(", "panics crash the input loop");
}

#[test]
fn no_panic_in_production_code() {
    assert_absent("panic!(", "panics crash the input loop");
}

#[test]
fn no_unreachable_in_production_code() {
    assert_absent("unreachable!(", "panics crash the input loop");
}

#[test]
fn no_todo_or_unimplemented_in_production_code() {
    assert_absent("todo!(", "stubs must not ship");
    assert_absent("unimplemented!(", "stubs must not ship");
}

#[test]
fn no_silent_error_discard_in_production_code() {
    assert_absent("let _ =", "errors must be inspected or logged");
    assert_absent(".ok()", "errors must be inspected or logged");
}

#[test]
fn no_dead_code_allowance_in_production_code() {
    assert_absent("#[allow(dead_code)]", "unused code should be removed");
}
