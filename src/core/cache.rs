//! Snapshot persistence with a schema version guard.
//!
//! Load fails soft: a missing file, unreadable content, malformed JSON, or a
//! stale `schemaVersion` all yield "no cache", and the caller's policy is
//! always a full rebuild - never a partial merge. The cache file assumes a
//! single-process owner; concurrent writers are last-writer-wins.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::core::snapshot::{AnalysisSnapshot, SCHEMA_VERSION};

pub const CACHE_FILE_NAME: &str = ".propmock-cache.json";

/// Load the persisted snapshot for a project root, if a current one exists.
pub fn load_cache(root: &Path) -> Option<AnalysisSnapshot> {
    load_cache_file(&root.join(CACHE_FILE_NAME))
}

/// Load a snapshot from an explicit cache file path.
pub fn load_cache_file(path: &Path) -> Option<AnalysisSnapshot> {
    let content = fs::read_to_string(path).ok()?;
    let snapshot: AnalysisSnapshot = serde_json::from_str(&content).ok()?;

    if snapshot.schema_version != SCHEMA_VERSION {
        return None;
    }

    Some(snapshot)
}

/// Persist a snapshot for a project root.
///
/// A write failure is reported to the caller but is non-fatal at every call
/// site: the scan result is still valid in memory.
pub fn save_cache(root: &Path, snapshot: &AnalysisSnapshot) -> Result<()> {
    save_cache_file(&root.join(CACHE_FILE_NAME), snapshot)
}

/// Persist a snapshot to an explicit cache file path.
pub fn save_cache_file(path: &Path, snapshot: &AnalysisSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json).with_context(|| format!("Failed to write cache: {}", path.display()))?;
    Ok(())
}
