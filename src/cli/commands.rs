//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tracktime")]
#[command(about = "Report tracked working time against an hourly goal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML settings file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Date layout of the log (e.g., %d.%m.%Y), overrides TRACKTIME_FORMAT
    #[arg(long, global = true, value_name = "LAYOUT")]
    pub date_format: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print time worked per interval and the running delta to the goal
    Report {
        /// Log file to read (default: stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Interval to group by (d, w, m)
        #[arg(short, long)]
        interval: Option<String>,

        /// Goal in hours per interval
        #[arg(short = 'H', long, allow_negative_numbers = true)]
        hours: Option<f64>,

        /// Print deltas in seconds
        #[arg(short, long)]
        seconds: bool,

        /// Print the overall delta after the last interval
        #[arg(short, long)]
        total: bool,

        /// How to count bonus work (include, exclude, only)
        #[arg(short, long)]
        bonus: Option<String>,
    },

    /// Print all entries as a LaTeX table
    Latex {
        /// Log file to read (default: stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config,
}
