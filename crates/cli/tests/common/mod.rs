//! Shared test utilities for envini CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write INI fixtures to temporary files.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Override variables read by the demonstration config are cleared.

use assert_cmd::Command;
use std::io::Write;

/// Returns a hermetic `envini` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Variables that feed the demonstration config are cleared.
pub fn envini_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envini");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("ENVINI_CONFIG_PATH")
        .env_remove("ENVINI_LOG")
        .env_remove("PROJECT_NAME")
        .env_remove("THE_ANSWER");

    cmd
}

/// Writes `contents` to a temporary `.ini` file that lives as long as the handle.
pub fn ini_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".ini")
        .tempfile()
        .expect("create temp ini");
    file.write_all(contents.as_bytes()).expect("write temp ini");
    file
}

/// Sample file exercising every field of the demonstration config.
#[allow(dead_code)]
pub const EXAMPLE_INI: &str = "\
# Example EnvINI configuration
Project Name = \"EnvINI Example\"
lucky_agent = 7.77
second_bool = yes

[Context]
; section_text falls back to its default

[Book of Numbers]
float_test = 2.5
the_answer = 42
";
