use anyhow::Result;
use colored::Colorize;

use crate::cli::args::ScanCommand;
use crate::cli::exit_status::ExitStatus;
use crate::cli::report;
use crate::core::cache::{load_cache_file, save_cache_file};

pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let (mut session, config) = super::build_session(&cmd.common)?;
    let cache_path = session.root().join(&config.cache_file);

    // A stale or missing cache never blocks a scan; it only informs the user.
    if cmd.common.verbose {
        match load_cache_file(&cache_path) {
            Some(cached) => eprintln!(
                "Note: previous snapshot from timestamp {} found, rebuilding",
                cached.timestamp
            ),
            None => eprintln!("Note: no usable cached snapshot, building from scratch"),
        }
    }

    let scan = session.scan_project();

    if !cmd.no_cache
        && let Err(err) = save_cache_file(&cache_path, &scan.snapshot)
    {
        // Non-fatal: the snapshot is still valid in memory.
        eprintln!("{} {}", "warning:".bold().yellow(), err);
    }

    report::print_scan_summary(&scan.snapshot, &scan.stats, cmd.common.verbose);
    Ok(ExitStatus::Success)
}
