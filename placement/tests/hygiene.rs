//! Hygiene: enforces coding standards at test time
//!
//! Scans production sources of the placement engine and of the widget crate
//! that drives it. The engine is pure math running inside resize/scroll
//! handlers, so every budget there is zero. The widget talks to the DOM,
//! where discarding a failed listener removal is normal, so its discard
//! budgets are ratchets: they may shrink, never grow.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    placement: usize,
    widget: usize,
}

const BUDGETS: &[Budget] = &[
    // Panics: these crash the page.
    Budget { pattern: ".unwrap()", placement: 0, widget: 0 },
    Budget { pattern: ".expect(", placement: 0, widget: 0 },
    Budget { pattern: "panic!(", placement: 0, widget: 0 },
    Budget { pattern: "unreachable!(", placement: 0, widget: 0 },
    Budget { pattern: "todo!(", placement: 0, widget: 0 },
    Budget { pattern: "unimplemented!(", placement: 0, widget: 0 },
    // Silent loss: discards results without inspecting.
    Budget { pattern: "let _ =", placement: 0, widget: 14 },
    Budget { pattern: ".ok()", placement: 0, widget: 10 },
    // Structure.
    Budget { pattern: "#[allow(dead_code)]", placement: 0, widget: 0 },
    // Output goes through the logging stack only.
    Budget { pattern: "println!(", placement: 0, widget: 0 },
    Budget { pattern: "dbg!(", placement: 0, widget: 0 },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `dir`, excluding `_test.rs` sidecars.
fn source_files(dir: &str) -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new(dir), &mut files);
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

/// Lines containing `pattern`, per file.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Every budget overrun, formatted for the assertion message.
fn overruns(files: &[SourceFile], max: impl Fn(&Budget) -> usize) -> Vec<String> {
    BUDGETS
        .iter()
        .filter_map(|budget| {
            let found = hits(files, budget.pattern);
            let count: usize = found.iter().map(|(_, c)| c).sum();
            (count > max(budget)).then(|| {
                let detail: Vec<String> = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect();
                format!("{} found {count}, max {}\n{}", budget.pattern, max(budget), detail.join("\n"))
            })
        })
        .collect()
}

#[test]
fn placement_sources_stay_within_budget() {
    let files = source_files("src");
    assert!(!files.is_empty(), "no placement sources found");
    let over = overruns(&files, |b| b.placement);
    assert!(over.is_empty(), "placement budget exceeded:\n{}", over.join("\n"));
}

#[test]
fn widget_sources_stay_within_budget() {
    let files = source_files("../widget/src");
    assert!(!files.is_empty(), "no widget sources found");
    let over = overruns(&files, |b| b.widget);
    assert!(over.is_empty(), "widget budget exceeded:\n{}", over.join("\n"));
}
