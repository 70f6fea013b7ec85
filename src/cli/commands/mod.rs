pub mod init;
pub mod keys;
pub mod props;
pub mod scan;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::core::AnalysisSession;

/// Load `.propmockrc.json` from the working directory and build a session.
/// CLI arguments override config values, which override built-in defaults.
pub fn build_session(common: &CommonArgs) -> Result<(AnalysisSession, Config)> {
    let config_result = load_config(Path::new("."))?;
    if common.verbose && !config_result.from_file {
        eprintln!("Note: No .propmockrc.json found, using default configuration");
    }
    let config = config_result.config;

    let root: PathBuf = common
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.source_root));

    let session = AnalysisSession::new(root)
        .with_ignores(config.ignores.clone())
        .with_verbose(common.verbose);

    Ok((session, config))
}
