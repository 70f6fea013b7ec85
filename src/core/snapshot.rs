//! Snapshot types and the index builder.
//!
//! A snapshot is the versioned, serializable result of one full project scan.
//! The two lookup indices (`key_to_components`, `component_to_keys`) are
//! always derived together from `components`/`usages` - a snapshot is only
//! ever produced or swapped in whole, never half-updated.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::core::scan::FileScan;

/// Bumped whenever the snapshot layout changes. A persisted snapshot with a
/// different version is discarded and rebuilt from scratch.
pub const SCHEMA_VERSION: &str = "2";

/// One source location where a localization key is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationUsage {
    pub key: String,
    pub component_path: String,
    pub component_name: String,
    /// 1-indexed source line.
    pub line: usize,
    /// 1-indexed source column.
    pub column: usize,
}

/// The UI component detected in one file, if any.
///
/// A file yields at most one component: the first declaration in source order
/// whose body contains a JSX construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    pub path: String,
    pub name: String,
    /// Name of the props interface, when the first parameter's annotation is
    /// a direct named type reference.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub props_interface: Option<String>,
    /// Deduplicated usage keys in first-seen order.
    pub translation_keys: Vec<String>,
}

/// The versioned result of one full project scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSnapshot {
    pub schema_version: String,
    /// Milliseconds since the Unix epoch at build time.
    pub timestamp: u64,
    pub translation_usages: Vec<TranslationUsage>,
    pub components: Vec<ComponentInfo>,
    /// key -> paths of components with at least one usage of that key.
    pub key_to_components: BTreeMap<String, Vec<String>>,
    /// component path -> deduplicated usage keys.
    pub component_to_keys: BTreeMap<String, Vec<String>>,
}

/// Build a full snapshot from per-file scan results.
///
/// Always a full rebuild from the complete discovered file set; there is no
/// incremental diffing below whole-project granularity. Input order is
/// preserved, so discovery order across files and source order within a file
/// carry through to `components` and `translation_usages`.
pub fn build_snapshot(scans: Vec<FileScan>) -> AnalysisSnapshot {
    let mut usages = Vec::new();
    let mut components = Vec::new();

    for scan in scans {
        usages.extend(scan.usages);
        if let Some(component) = scan.component {
            components.push(component);
        }
    }

    let mut key_to_components: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut component_to_keys: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for component in &components {
        for key in &component.translation_keys {
            key_to_components
                .entry(key.clone())
                .or_default()
                .push(component.path.clone());
        }
        component_to_keys.insert(component.path.clone(), component.translation_keys.clone());
    }

    AnalysisSnapshot {
        schema_version: SCHEMA_VERSION.to_string(),
        timestamp: epoch_millis(),
        translation_usages: usages,
        components,
        key_to_components,
        component_to_keys,
    }
}

fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
