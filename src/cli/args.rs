//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Full project scan; rebuilds and persists the analysis snapshot
//! - `props`: Synthesize mock props for one component interface
//! - `keys`: Print the key -> components index from a fresh scan
//! - `init`: Initialize propmock configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Do not persist the snapshot to the cache file
    #[arg(long)]
    pub no_cache: bool,
}

#[derive(Debug, Args)]
pub struct PropsCommand {
    /// Component source file containing (or importing) the interface
    pub file: PathBuf,

    /// Name of the props interface to synthesize
    pub interface: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan the project and rebuild the analysis snapshot
    Scan(ScanCommand),
    /// Synthesize mock props for a component interface
    Props(PropsCommand),
    /// Print the key -> components index
    Keys(KeysCommand),
    /// Initialize propmock configuration file
    Init,
}
