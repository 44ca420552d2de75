//! Unipage CLI Binary
//!
//! Command-line interface for inspecting and invoking service operations with
//! unified pagination arguments.

use clap::Parser;
use std::process;
use tracing::{error, info};
use unipage::cli::{Cli, RunContext};
use unipage::config::{ConfigLoader, UnipageConfig};
use unipage::error::CliError;
use unipage::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", unipage::cli::map_error(&e));
            process::exit(1);
        }
    };
    let config = apply_logging_flags(&cli, config);

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Unipage CLI starting");

    let context = match RunContext::new(&cli.model, config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading service model: {}", e);
            eprintln!("{}", unipage::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(CliError::Arguments(e)) => e.exit(),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", unipage::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Load configuration from an explicit file or the layered sources.
fn load_config(cli: &Cli) -> Result<UnipageConfig, CliError> {
    let config = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path)?,
        None => ConfigLoader::load(&cli.workspace)?,
    };
    Ok(config)
}

/// Apply logging flags on top of the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn apply_logging_flags(cli: &Cli, mut config: UnipageConfig) -> UnipageConfig {
    let logging = &mut config.logging;

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
        if cli.log_output.is_none() {
            logging.output = "file".to_string();
        }
    }

    config
}
