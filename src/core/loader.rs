use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use swc_common::SourceMap;

use crate::core::parsers::tsx::{ParsedSource, parse_tsx_source};

/// Session-scoped source loader with a parsed-file cache.
///
/// The cache is keyed by absolute path and lives as long as the owning
/// `AnalysisSession` - it is explicit state threaded through the analysis,
/// never an ambient global. There is no eviction: a session is expected to be
/// bounded by one scan or one preview request chain, and a file-change
/// notification from the external watcher surface calls `invalidate` to drop
/// the stale entry.
#[derive(Default)]
pub struct SourceLoader {
    cache: HashMap<PathBuf, Arc<ParsedSource>>,
}

impl SourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and parse a file, reusing the cached tree when present.
    ///
    /// A read or parse failure is returned as an error; every caller converts
    /// it into a skip for that file, so it never aborts a project scan.
    pub fn load(&mut self, path: &Path) -> Result<Arc<ParsedSource>> {
        let key = normalize_path(path);

        if let Some(parsed) = self.cache.get(&key) {
            return Ok(parsed.clone());
        }

        let code = fs::read_to_string(&key)
            .with_context(|| format!("Failed to read file: {}", key.display()))?;

        let source_map = Arc::new(SourceMap::default());
        let parsed = parse_tsx_source(code, &key.to_string_lossy(), source_map)?;

        let parsed = Arc::new(parsed);
        self.cache.insert(key, parsed.clone());
        Ok(parsed)
    }

    /// Drop the cached tree for one file, forcing a re-parse on next load.
    pub fn invalidate(&mut self, path: &Path) {
        self.cache.remove(&normalize_path(path));
    }

    /// Number of files currently cached.
    pub fn cached_files(&self) -> usize {
        self.cache.len()
    }
}

/// Canonicalize where possible so the same file reached via different
/// relative spellings shares one cache entry. A path that cannot be
/// canonicalized (e.g. it does not exist yet) is used as-is and the
/// subsequent read reports the real error.
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
