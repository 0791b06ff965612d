//! CLI argument definitions for mazeboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "mazeboard")]
#[command(about = "Maze game leaderboard", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "mazeboard.toml")]
    pub config: PathBuf,

    /// Directory holding the saved leaderboard (overrides the config file)
    #[arg(long, value_name = "DIR", env = "MAZEBOARD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record a level completion time
    Record {
        /// Level number as shown on the board (1 = first level)
        #[arg(allow_hyphen_values = true)]
        level: i64,
        /// Completion time in seconds
        #[arg(allow_hyphen_values = true)]
        seconds: f64,
    },
    /// Show the leaderboard
    Show {
        /// Only show this level (1 = first level)
        #[arg(long)]
        level: Option<i64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Erase every recorded time
    Clear {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Export the leaderboard
    Export {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "tsv")]
        format: ExportFormat,
    },
    /// Play through the levels with a terminal stopwatch
    Play,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Tsv,
    Json,
}
