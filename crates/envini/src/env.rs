//! Environment variable access for overrides.
//!
//! Responsibilities:
//! - Read loader settings (`ENVINI_CONFIG_PATH`) with empty/whitespace filtering.
//! - Read per-field override variables verbatim.
//!
//! Invariants:
//! - Loader settings: empty or whitespace-only values are unset; others are trimmed.
//! - Field overrides: only an empty value is unset; the value is never trimmed.

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read a field override variable, returning None if unset or empty.
///
/// The value is returned exactly as set, surrounding whitespace included.
pub fn env_override(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
