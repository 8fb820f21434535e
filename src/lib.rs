//! InkMaster library root.
//! Exposes the studio controller, its data model and the CLI front end.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::commands;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::app::StudioApp;
use crate::core::clock::FixedClock;
use crate::errors::AppResult;
use std::path::PathBuf;

/// Build the session state for one invocation.
pub fn build_app(cli: &Cli, cfg: &Config) -> StudioApp {
    let app = StudioApp::from_config(cfg);
    match cli.as_of {
        Some(date) => app.with_clock(FixedClock::new(date)),
        None => app,
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let config_path = cli.config.as_deref().map(utils::path::expand_tilde);
    let mut app = build_app(cli, cfg);

    match &cli.command {
        Commands::Dashboard => commands::dashboard::handle(cfg, &app),
        Commands::Appointments { .. } => commands::appointments::handle(&cli.command, cfg, &app),
        Commands::Clients => commands::clients::handle(cfg, &app),
        Commands::Portfolio => commands::portfolio::handle(&app),
        Commands::Estimate { .. } => commands::estimate::handle(&cli.command, cfg, &mut app),
        Commands::Guide => commands::guide::handle_guide(),
        Commands::Services => commands::guide::handle_services(),
        Commands::Export { .. } => commands::export::handle(&cli.command, &app),
        Commands::Config { .. } => {
            commands::config::handle(&cli.command, cfg, config_path.as_deref())
        }
        Commands::Shell => commands::shell::handle(cfg, &mut app),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let config_path: Option<PathBuf> = cli.config.as_deref().map(utils::path::expand_tilde);
    let mut cfg = Config::load(config_path.as_deref())?;

    // 3️⃣ command-line overrides
    if cli.empty {
        cfg.seed_demo_data = false;
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
