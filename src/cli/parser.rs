use crate::models::gap_order::GapOrder;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rLogGap
#[derive(Parser)]
#[command(
    name = "rloggap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render an exported log as a timeline and highlight large gaps between entries",
    long_about = "Render an exported log as a timeline and highlight large gaps between entries.\n\n\
                  Expected line format: | Time | Caller | Line | Message |\n\
                  e.g. `Jan 5, 2024 @ 10:00:03.500  app.http.Server  42  :  request done`"
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the timeline of a log file
    Timeline {
        /// Log file to analyze
        #[arg(long, short = 'f', value_name = "FILE")]
        file: Option<PathBuf>,

        /// Maximum number of characters kept per message
        #[arg(long = "max-msg-len", value_name = "N")]
        max_message_length: Option<usize>,

        /// Minimum gap (ms) required to draw a gap bar
        #[arg(long = "min-gap", value_name = "MS")]
        min_gap_ms: Option<i64>,

        /// Bar width (characters) used for the largest gap
        #[arg(long = "multiplier", value_name = "N")]
        bar_multiplier: Option<usize>,

        /// Disable ANSI colors
        #[arg(long = "no-color")]
        no_color: bool,

        /// Chronological direction of the log lines
        #[arg(long, value_enum, value_name = "ORDER")]
        order: Option<GapOrder>,
    },

    /// Show or initialize the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        /// Write a configuration file with default values
        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        /// Overwrite an existing configuration file (with --init)
        #[arg(long, short = 'f', requires = "init")]
        force: bool,
    },
}
