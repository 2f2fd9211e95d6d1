//! shiftlog library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules: identity store, shift ledger, row-store backends, and the
//! transport-agnostic command router.

pub mod bot;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Start => cli::commands::start::handle(),
        Commands::Register { .. } => cli::commands::register::handle(&cli.command, cfg),
        Commands::ClockIn { .. } => cli::commands::clock_in::handle(&cli.command, cfg),
        Commands::ClockOut { .. } => cli::commands::clock_out::handle(&cli.command, cfg),
        Commands::Cancel { .. } => cli::commands::cancel::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once; the command line may override the data directory
    let mut cfg = Config::load();
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
