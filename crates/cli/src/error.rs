//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map envini `ConfigError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-4 are reserved for specific error categories.

use envini::{BindError, ConfigError};

/// Structured exit codes for envini.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the file was loaded, bound, and printed.
    Success = 0,

    /// General error - unhandled or generic failure.
    ///
    /// Also used for command-line usage errors, which clap would otherwise
    /// report with 2.
    GeneralError = 1,

    /// The INI file could not be read.
    ///
    /// Only file reads use this code; bad arguments never do.
    FileReadError = 2,

    /// The INI file is not valid UTF-8 or contains a malformed line.
    ///
    /// Scripts should fix the file; retrying will not help.
    ParseError = 3,

    /// A value could not be bound into the configuration.
    ///
    /// Covers coercion failures (including bad environment overrides),
    /// unsupported field kinds, and invalid destinations.
    BindError = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::ConfigFileRead { .. } => ExitCode::FileReadError,
            ConfigError::Parse(_) | ConfigError::Bind(BindError::Parse(_)) => ExitCode::ParseError,
            ConfigError::Bind(_) => ExitCode::BindError,
            ConfigError::MissingConfigPath
            | ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no `ConfigError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
