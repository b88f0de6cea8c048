//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not load or bind configuration (see `main`).
//! - Does not format output (see `output` module).

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "envini")]
#[command(about = "EnvINI - Load an INI file with environment overrides and print it as JSON", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envini ./env.ini\n  envini --output text ./env.ini\n  PROJECT_NAME=demo envini --show-config ./env.ini\n"
)]
pub struct Cli {
    /// Path to the INI file to load.
    ///
    /// Can also be set via ENVINI_CONFIG_PATH environment variable.
    #[arg(value_name = "INIFILE")]
    pub ini_file: Option<PathBuf>,

    /// Output format for the parsed file (json, text)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Also print the bound demonstration configuration as JSON
    #[arg(long)]
    pub show_config: bool,

    /// Log filter directive (e.g. "debug", "envini=trace")
    #[arg(long, env = "ENVINI_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log line format written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty JSON with numbers and booleans typed
    Json,
    /// Tab-indented view with literal-looking values left unquoted
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}
