//! Centralized constants for the EnvINI workspace.
//!
//! This module contains names and literals shared between the parser,
//! the binder, the loader, and the CLI.

// =============================================================================
// Sections
// =============================================================================

/// Implicit section active before any `[section]` header is seen.
///
/// Also the fallback namespace for lookups in every other section.
pub const GLOBAL_SECTION: &str = "GLOBAL";

// =============================================================================
// Coercion
// =============================================================================

/// Literals (compared case-insensitively) that coerce to `true`.
pub const TRUTHY_LITERALS: [&str; 5] = ["true", "t", "yes", "y", "1"];

// =============================================================================
// Environment
// =============================================================================

/// Environment variable naming the INI file when no path is given explicitly.
pub const CONFIG_PATH_ENV: &str = "ENVINI_CONFIG_PATH";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_ENV: &str = "DOTENV_DISABLED";
