//! Command-line interface definition.
//!
//! Lives in the library so the xtask can render the man page from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::extract::Platform;

/// Version string with build metadata for `--version`.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("CHATX_BUILD_DATE"),
    ")"
);

/// Version string with build metadata for `--version`.
#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("CHATX_BUILD_DATE"),
    ")"
);

/// Chat Transcript Exporter - extract Q&A pairs from rendered chat pages
#[derive(Debug, Parser)]
#[command(name = "chatx", version, long_version = LONG_VERSION, about)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export a page snapshot as question/answer JSON and copy it to the clipboard
    Export {
        /// Path to the JSON page snapshot
        snapshot: PathBuf,

        /// Platform that rendered the page (detected from the snapshot URL if omitted)
        #[arg(short, long)]
        platform: Option<Platform>,

        /// Print the JSON to stdout instead of copying it to the clipboard
        #[arg(long)]
        stdout: bool,
    },

    /// List supported platforms and the hosts they are detected from
    Platforms,

    /// Show configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}
