//! Error types for parsing, binding, and loading.
//!
//! Responsibilities:
//! - Define error variants for INI parse failures (`ParseError`).
//! - Define error variants for field binding failures (`BindError`).
//! - Define error variants for file and `.env` loading failures (`ConfigError`).
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the CLI crate).
//!
//! Invariants:
//! - All error variants include context for debugging (field, tag, path, line).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Every error is fatal to the operation that raised it; nothing is retried.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::binder::FieldKind;

/// Errors raised while turning raw bytes into a `DataMap`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("INI data is not valid UTF-8 (first invalid byte at offset {offset})")]
    InvalidUtf8 { offset: usize },

    /// A key/value line whose key is empty after trimming, e.g. `= value`.
    #[error("line {line}: key/value pair has an empty key")]
    EmptyKey { line: usize },
}

/// Errors raised while binding a `DataMap` into a destination.
#[derive(Error, Debug)]
pub enum BindError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The destination's descriptor table does not match its slots.
    #[error("invalid bind destination at field '{field}': {reason}")]
    InvalidDestination { field: String, reason: String },

    #[error(
        "cannot coerce value {value:?} for field '{field}' (tag '{tag}', section '{section}') into {kind}: {message}"
    )]
    FieldCoercion {
        field: String,
        tag: String,
        section: String,
        kind: FieldKind,
        value: String,
        message: String,
    },

    #[error("field '{field}' has unsupported kind {kind}")]
    UnsupportedFieldKind { field: String, kind: &'static str },
}

/// Errors that can occur while loading configuration from disk.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No INI file given. Pass a path or set {}", crate::constants::CONFIG_PATH_ENV)]
    MissingConfigPath,

    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to bind config file: {0}")]
    Bind(#[from] BindError),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
