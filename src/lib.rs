//! timed library root.
//! Exposes the CLI parser, the high-level run() function and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::messages::warning;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Some(command) = &cli.command else {
        return cli::commands::track::handle(&cli.track, cfg);
    };

    if !cli.track.is_empty() {
        warning("Day flags are ignored when a subcommand is given");
    }

    match command {
        Commands::List { start, end } => {
            cli::commands::list::handle(start.as_deref(), end.as_deref(), cfg)
        }
        Commands::Delete { date } => cli::commands::delete::handle(date, cfg),
        Commands::Version => cli::commands::version::handle(),
        Commands::Init { force } => cli::commands::init::handle(*force, cfg),
        Commands::Config {
            print_config,
            edit_config,
            editor,
        } => cli::commands::config::handle(*print_config, *edit_config, editor.as_deref(), cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // configuration is loaded once and passed down by reference
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    tracing::debug!(database = %cfg.database, "configuration resolved");
    dispatch(&cli, &cfg)
}
