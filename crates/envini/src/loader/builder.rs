//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Resolve the INI file path from builder methods or `ENVINI_CONFIG_PATH`.
//! - Optionally load a `.env` file so its variables can act as overrides.
//! - Read the file and hand the bytes to the parser and binder.
//!
//! Does NOT handle:
//! - Parsing or binding logic (see `datamap` and `binder`).
//! - Holding on to parsed maps between calls (see `cache.rs`).
//!
//! Invariants / Assumptions:
//! - A path set through `with_config_path` wins over `ENVINI_CONFIG_PATH`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::binder::{Bindable, unmarshal};
use crate::constants::{CONFIG_PATH_ENV, DOTENV_DISABLED_ENV};
use crate::datamap::DataMap;
use crate::env::env_var_or_none;
use crate::error::ConfigError;

/// Loader that finds an INI file and binds it into a destination.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_ENV).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the INI file to read.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Fill the config path from `ENVINI_CONFIG_PATH` unless one is already set.
    pub fn from_env(mut self) -> Self {
        if self.config_path.is_none() {
            if let Some(path) = env_var_or_none(CONFIG_PATH_ENV) {
                self.config_path = Some(PathBuf::from(path));
            }
        }
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn read(&self) -> Result<Vec<u8>, ConfigError> {
        let path = self
            .config_path
            .as_deref()
            .ok_or(ConfigError::MissingConfigPath)?;
        debug!(path = %path.display(), "reading INI file");
        std::fs::read(path).map_err(|source| ConfigError::ConfigFileRead {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse the INI file without binding it.
    pub fn load_map(&self) -> Result<DataMap, ConfigError> {
        Ok(DataMap::parse(&self.read()?)?)
    }

    /// Read the INI file and bind it into `dest`, returning the parsed map.
    pub fn load_into(&self, dest: &mut dyn Bindable) -> Result<DataMap, ConfigError> {
        Ok(unmarshal(&self.read()?, dest)?)
    }
}
