//! Hygiene: source-scan budgets for the trail crate.
//!
//! Each pattern below has a budget (ideally zero) over production `.rs`
//! files under `src/`. Test files (`*_test.rs`) are exempt. Budgets only go
//! down; fix an existing hit before adding a new one.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

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
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Files and line counts containing `pattern`, skipping `//` comment lines.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budget(label: &str, pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "{label} budget exceeded: found {count}, max {max}.\n{listing}");
}

macro_rules! budget {
    ($name:ident, $pattern:expr, $max:expr) => {
        #[test]
        fn $name() {
            assert_budget(stringify!($name), $pattern, $max);
        }
    };
}

// Panics.
budget!(unwrap_budget, ".unwrap()", 0);
budget!(expect_budget, ".expect(", 0);
budget!(panic_budget, "panic!(", 0);
budget!(unreachable_budget, "unreachable!(", 0);
budget!(todo_budget, "todo!(", 0);
budget!(unimplemented_budget, "unimplemented!(", 0);

// Silent loss.
budget!(silent_discard_budget, "let _ =", 0);
budget!(dot_ok_budget, ".ok()", 0);

// Debug leftovers.
budget!(println_budget, "println!(", 0);
budget!(dbg_budget, "dbg!(", 0);
budget!(allow_dead_code_budget, "#[allow(dead_code)]", 0);

// The host owns logging; failures are returned, never printed here.
budget!(console_budget, "console::", 0);

/// Only the drawing and frame-loop modules may reach into the browser.
#[test]
fn browser_apis_stay_at_the_edges() {
    let allowed = ["draw.rs", "frame_loop.rs"];
    let offenders = source_files()
        .into_iter()
        .filter(|f| !allowed.iter().any(|name| f.path.ends_with(name)))
        .filter(|f| f.content.contains("web_sys::") || f.content.contains("wasm_bindgen"))
        .map(|f| f.path)
        .collect::<Vec<_>>();
    assert!(offenders.is_empty(), "browser APIs used outside draw/frame_loop: {offenders:?}");
}
