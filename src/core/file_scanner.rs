use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::WalkDir;

/// Directory names that are never descended into, regardless of config.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", ".next", "coverage"];

/// Result of discovering source files under a root.
pub struct DiscoveredFiles {
    /// Eligible files in deterministic (lexicographic per directory) order.
    pub files: Vec<PathBuf>,
    /// Paths skipped because of access errors.
    pub skipped_count: usize,
}

/// Recursively enumerate eligible source files under `root`.
///
/// Skips any directory whose name is in the built-in exclusion set or in
/// `extra_ignores`. A directory read failure is counted (and logged when
/// verbose) and only that subtree is lost; sibling subtrees continue. The
/// output order is stable so repeated scans produce identical snapshots.
pub fn discover_files(root: &Path, extra_ignores: &[String], verbose: bool) -> DiscoveredFiles {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            // Never filter the root itself, even if its name matches.
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !EXCLUDED_DIRS.contains(&name.as_ref()) && !extra_ignores.iter().any(|i| i == &*name)
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && is_scannable_file(path) {
            files.push(path.to_path_buf());
        }
    }

    DiscoveredFiles {
        files,
        skipped_count,
    }
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}
