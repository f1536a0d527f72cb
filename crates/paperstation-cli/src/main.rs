//! `paperstation` — e-paper weather dashboard client.
//!
//! Polls a weather station and a forecast service, renders an 800×600
//! greyscale dashboard and pushes minimal updates to a pluggable e-paper
//! display. See the `paperstation-core` crate for the redraw engine.

mod cli;
mod commands;
mod drivers;
mod error;
mod sources;

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, error, info};

use paperstation_core::config::Config;

use crate::cli::{Cli, Command};
use crate::error::StationError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);
    info!("paperstation starting");

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match &cli.command {
        Command::Run(args) => commands::run(&config, args),
        Command::Demo => commands::demo(&config),
        Command::Bitmap(args) => commands::bitmap(&config, args),
        Command::List => commands::list(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(filter)
        .init();
}

/// Load the TOML config file (if any) and apply CLI flag overrides.
fn load_config(cli: &Cli) -> Result<Config, StationError> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|source| StationError::ConfigRead {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&raw).map_err(|source| StationError::ConfigParse {
                path: path.clone(),
                source,
            })?
        }
        None => Config::default(),
    };

    if let Some(driver) = &cli.driver {
        config.driver = Some(driver.clone());
    }
    if cli.no_partial {
        config.partial = false;
    }
    Ok(config)
}
