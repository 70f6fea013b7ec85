//! Report formatting for CLI output.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{AnalysisSnapshot, ScanStats};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the scan summary to stdout.
pub fn print_scan_summary(snapshot: &AnalysisSnapshot, stats: &ScanStats, verbose: bool) {
    print_scan_summary_to(snapshot, stats, verbose, &mut io::stdout().lock());
}

/// Print the scan summary to a custom writer (used by tests).
pub fn print_scan_summary_to<W: Write>(
    snapshot: &AnalysisSnapshot,
    stats: &ScanStats,
    verbose: bool,
    writer: &mut W,
) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} {} - {} components, {} usages, {} distinct keys",
            stats.files_scanned,
            if stats.files_scanned == 1 { "file" } else { "files" },
            snapshot.components.len(),
            snapshot.translation_usages.len(),
            snapshot.key_to_components.len(),
        )
        .green()
    );

    if stats.files_skipped > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) skipped due to read/parse errors{}",
            "warning:".bold().yellow(),
            stats.files_skipped,
            if verbose { "" } else { " (use -v for details)" }
        );
    }

    if verbose {
        print_key_index_to(snapshot, writer);
    }
}

/// Print the key -> components index.
pub fn print_key_index(snapshot: &AnalysisSnapshot) {
    print_key_index_to(snapshot, &mut io::stdout().lock());
}

pub fn print_key_index_to<W: Write>(snapshot: &AnalysisSnapshot, writer: &mut W) {
    for (key, components) in &snapshot.key_to_components {
        let _ = writeln!(writer, "{}", key.cyan().bold());
        for path in components {
            let _ = writeln!(writer, "  {}", path.dimmed());
        }
    }
}
