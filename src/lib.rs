//! rLogGap library root.
//! Exposes the CLI parser, the high-level run() function and the
//! parse → analyze → render pipeline modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Timeline { .. } => cli::commands::timeline::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (explicit --config path wins)
    //    `config --init` must still work when the current file is broken
    let cfg = match Config::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) if matches!(cli.command, Commands::Config { init: true, .. }) => {
            ui::messages::warning(format!("{}; using defaults", e));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
