//! rponto library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logger;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands;

    match &cli.command {
        Commands::Init => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } | Commands::Logout | Commands::Whoami => {
            commands::login::handle(&cli.command, cfg)
        }
        Commands::Employee { .. } => commands::employee::handle(&cli.command, cfg),
        Commands::Punch { .. } => commands::punch::handle(cli, cfg),
        Commands::Today => commands::today::handle(cfg),
        Commands::History { .. } => commands::history::handle(&cli.command, cfg),
        Commands::Report { .. } => commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Stats => commands::stats::handle(cfg),
        Commands::Espelho { .. } => commands::espelho::handle(&cli.command, cfg),
        Commands::Import { .. } => commands::import::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point called by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (test mode: defaults only)
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    // 3️⃣ command-line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(out) = &cli.out {
        cfg.output_dir = out.clone();
    }

    logger::init_logger(&cfg.log_level);
    tracing::debug!(database = %cfg.database, output_dir = %cfg.output_dir, "configuration resolved");

    // 4️⃣ hand over to the dispatcher
    dispatch(&cli, &cfg)
}
