//! rTimesheet library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (normalizer, timesheet lifecycle, onboarding wizard, storage).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
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
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Submit { .. } | Commands::Approve { .. } | Commands::Reject { .. } => {
            cli::commands::review::handle(&cli.command, cfg)
        }
        Commands::Onboard { .. } => cli::commands::onboard::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; --db wins over the configured database
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
