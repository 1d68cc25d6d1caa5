//! CLI command definitions and dispatch for the `islimits` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod output;
pub mod parse;
pub mod replay;
pub mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Inspect and replay island placement limits.
#[derive(Parser)]
#[command(name = "islimits", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Data directory holding config.toml.
    #[arg(long, global = true, env = "ISLIMITS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Explicit configuration file (overrides {data-dir}/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one capability string against the configured catalog.
    Parse {
        /// The capability, e.g. bskyblock.island.limit.HOPPER.20
        capability: String,

        /// Capability prefix to parse against (e.g. bskyblock.island.limit.).
        #[arg(long, conflicts_with = "game_mode")]
        prefix: Option<String>,

        /// Name of the configured game mode whose prefix to use.
        #[arg(long)]
        game_mode: Option<String>,
    },

    /// Replay the lifecycle events of a scenario file.
    Replay {
        /// Path to the scenario TOML file.
        scenario: PathBuf,

        /// Persist records as JSON files in this directory instead of memory.
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Show the stored override record of an island.
    Show {
        /// Island identifier.
        island: String,

        /// Directory of the JSON record store.
        #[arg(long)]
        store: PathBuf,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
