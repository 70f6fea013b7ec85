//! Analysis session orchestrating the scan and preview pipelines.
//!
//! A session owns all mutable analysis state (the parsed-file cache) for one
//! project root. Execution is single-threaded and sequential; files are
//! scanned in discovery order so snapshots are reproducible. Per-file read or
//! parse failures degrade that file's contribution to nothing - a scan always
//! returns a snapshot.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use colored::Colorize;

use crate::core::file_scanner::discover_files;
use crate::core::loader::SourceLoader;
use crate::core::resolve::{TypeDecl, resolve_type};
use crate::core::scan::scan_file;
use crate::core::snapshot::{AnalysisSnapshot, build_snapshot};
use crate::core::synth::synthesize_interface;
use crate::core::value::{EnumDescriptor, EnumMetadata, MockValue, PropsBundle};

/// Per-scan bookkeeping for CLI reporting.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanStats {
    /// Files successfully parsed and scanned.
    pub files_scanned: usize,
    /// Files discovered but skipped (read or parse failure).
    pub files_skipped: usize,
    /// Paths the discoverer could not access.
    pub discovery_skipped: usize,
}

/// Result of a full project scan: the snapshot plus bookkeeping.
pub struct ProjectScan {
    pub snapshot: AnalysisSnapshot,
    pub stats: ScanStats,
}

/// One analysis session over a project root.
pub struct AnalysisSession {
    root: PathBuf,
    extra_ignores: Vec<String>,
    verbose: bool,
    loader: SourceLoader,
}

impl AnalysisSession {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extra_ignores: Vec::new(),
            verbose: false,
            loader: SourceLoader::new(),
        }
    }

    pub fn with_ignores(mut self, ignores: Vec<String>) -> Self {
        self.extra_ignores = ignores;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full project scan: discover, parse, and scan every eligible file,
    /// then build the snapshot in one swap.
    pub fn scan_project(&mut self) -> ProjectScan {
        let discovered = discover_files(&self.root, &self.extra_ignores, self.verbose);

        let mut stats = ScanStats {
            discovery_skipped: discovered.skipped_count,
            ..ScanStats::default()
        };
        let mut scans = Vec::new();

        for path in &discovered.files {
            let parsed = match self.loader.load(path) {
                Ok(parsed) => parsed,
                Err(err) => {
                    stats.files_skipped += 1;
                    if self.verbose {
                        eprintln!("{} {}", "warning:".bold().yellow(), err);
                    }
                    continue;
                }
            };

            scans.push(scan_file(&path.to_string_lossy(), &parsed));
            stats.files_scanned += 1;
        }

        ProjectScan {
            snapshot: build_snapshot(scans),
            stats,
        }
    }

    /// Scan entry point per the external contract: a pure function of the
    /// file tree at call time, always yielding a snapshot.
    pub fn analyze_project(&mut self) -> AnalysisSnapshot {
        self.scan_project().snapshot
    }

    /// Synthesize mock props for one component's declared interface.
    ///
    /// Deterministic given unchanged source, so the serving layer may cache
    /// the first result per component.
    pub fn generate_props(&mut self, file: &Path, interface_name: &str) -> Result<PropsBundle> {
        let resolved = resolve_type(&mut self.loader, interface_name, file).ok_or_else(|| {
            anyhow!(
                "Cannot resolve type '{}' from {}",
                interface_name,
                file.display()
            )
        })?;

        match resolved.decl {
            TypeDecl::Interface(interface) => Ok(synthesize_interface(
                &mut self.loader,
                &interface,
                &resolved.found_in,
            )),
            TypeDecl::Enum(enum_decl) => {
                let descriptor = EnumDescriptor::from_decl(&enum_decl);
                let value = descriptor.sample().unwrap_or(MockValue::Null);
                let mut enums = EnumMetadata::new();
                enums.insert(interface_name.to_string(), descriptor);
                Ok(PropsBundle { value, enums })
            }
        }
    }

    /// Drop the cached parse for one file (file-change notification hook).
    pub fn invalidate(&mut self, path: &Path) {
        self.loader.invalidate(path);
    }
}
