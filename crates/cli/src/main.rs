//! EnvINI CLI - load an INI file, bind it, and print it.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging to stderr.
//! - Load the INI file into the demonstration config and print the parsed map.
//!
//! Does NOT handle:
//! - Parsing or binding logic (see the `envini` crate).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide overrides.
//! - Only results go to stdout; logs and errors go to stderr.
//! - Argument errors exit with `GeneralError`, not clap's default of 2.

mod args;
mod demo;
mod error;
mod output;

use anyhow::{Context, Result};
use args::{Cli, LogFormat};
use clap::{CommandFactory, Parser};
use demo::DemoConfig;
use envini::ConfigLoader;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    let loader = match ConfigLoader::new().load_dotenv() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    // Usage errors exit 1 so they never collide with FileReadError (2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::GeneralError
            } else {
                ExitCode::Success
            };
            if let Err(print_err) = e.print() {
                eprintln!("Failed to print usage: {}", print_err);
            }
            std::process::exit(code.as_i32());
        }
    };
    init_tracing(&cli);

    let loader = match cli.ini_file.clone() {
        Some(path) => loader.with_config_path(path),
        None => loader,
    }
    .from_env();

    if loader.config_path().is_none() {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Failed to print help: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
        std::process::exit(ExitCode::Success.as_i32());
    }

    let exit_code = match run(&cli, &loader) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    match cli.log_format {
        LogFormat::Pretty => registry.with(fmt::layer().with_writer(std::io::stderr)).init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn run(cli: &Cli, loader: &ConfigLoader) -> Result<()> {
    let path = loader
        .config_path()
        .map(|p| p.to_path_buf())
        .unwrap_or_default();

    let mut config = DemoConfig::default();
    let map = loader
        .load_into(&mut config)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    tracing::info!(path = %path.display(), sections = map.sections().len(), "loaded INI file");

    println!("{}", output::render(&map, cli.output, &path)?);
    if cli.show_config {
        println!(
            "config as JSON:\n{}",
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?
        );
    }
    Ok(())
}
