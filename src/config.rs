use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".propmockrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Additional directory names to skip during discovery, merged with the
    /// built-in exclusion set (node_modules, .git, dist, ...).
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_cache_file")]
    pub cache_file: String,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_cache_file() -> String {
    ".propmock-cache.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            source_root: default_source_root(),
            cache_file: default_cache_file(),
        }
    }
}

/// Result of loading configuration, tracking whether a config file was found.
pub struct ConfigResult {
    pub config: Config,
    pub from_file: bool,
}

/// Load configuration from `.propmockrc.json` in the given directory.
///
/// Falls back to built-in defaults when no config file exists. An unreadable
/// or malformed config file is an error (unlike the analysis cache, which
/// fails soft): the user wrote it on purpose, so silently ignoring it would
/// hide typos.
pub fn load_config(dir: &Path) -> Result<ConfigResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        return Ok(ConfigResult {
            config: Config::default(),
            from_file: false,
        });
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file {}", config_path.display()))?;

    Ok(ConfigResult {
        config,
        from_file: true,
    })
}

/// Default config serialized as pretty JSON, used by `propmock init`.
pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    Ok(json)
}
