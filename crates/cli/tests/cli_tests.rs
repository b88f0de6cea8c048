//! Integration tests for the envini binary.
//!
//! These tests verify output formats, environment overrides, and the
//! structured exit codes scripts rely on.

mod common;

use common::{EXAMPLE_INI, envini_cmd, ini_file};
use predicates::prelude::*;

/// Test that running without a file prints usage and succeeds.
#[test]
fn test_no_file_prints_help_and_exits_0() {
    envini_cmd()
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Usage"));
}

/// Test that --version prints the package version.
#[test]
fn test_version_flag() {
    envini_cmd()
        .arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the default output is a JSON dump of every section.
#[test]
fn test_json_output_lists_sections() {
    let file = ini_file(EXAMPLE_INI);
    let output = envini_cmd().arg(file.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let (header, body) = stdout.split_once('\n').unwrap();
    assert!(header.ends_with("as JSON:"));

    let json: serde_json::Value = serde_json::from_str(body.trim()).unwrap();
    assert_eq!(json["GLOBAL"]["Project Name"], "EnvINI Example");
    assert_eq!(json["GLOBAL"]["lucky_agent"], 7.77);
    assert_eq!(json["Book of Numbers"]["the_answer"], 42);
    assert!(json["Context"].as_object().unwrap().is_empty());
}

/// Test that the text format leaves literal-looking values unquoted.
#[test]
fn test_text_output() {
    let file = ini_file(EXAMPLE_INI);
    envini_cmd()
        .args(["--output", "text"])
        .arg(file.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\t\t\"second_bool\": yes"))
        .stdout(predicate::str::contains("\"Project Name\": \"EnvINI Example\""));
}

/// Test that --show-config prints bound values including defaults and env overrides.
#[test]
fn test_show_config_applies_defaults_and_environment() {
    let file = ini_file(EXAMPLE_INI);
    let output = envini_cmd()
        .env("THE_ANSWER", "7")
        .arg("--show-config")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let (_, config) = stdout.split_once("config as JSON:\n").unwrap();
    let json: serde_json::Value = serde_json::from_str(config.trim()).unwrap();
    assert_eq!(json["ProjectName"], "EnvINI Example");
    assert_eq!(json["TrueBool"], true);
    assert_eq!(json["SecondBool"], true);
    assert_eq!(json["Context"]["SectionText"], "Quoth the Raven “Nevermore.”");
    assert_eq!(json["BookOfNumbers"]["TheAnswer"], 7);
}

/// Test that ENVINI_CONFIG_PATH is used when no file argument is given.
#[test]
fn test_config_path_from_environment() {
    let file = ini_file("[S]\nk = v\n");
    envini_cmd()
        .env("ENVINI_CONFIG_PATH", file.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"k\": \"v\""));
}

/// Test that a missing file returns exit code 2.
#[test]
fn test_missing_file_returns_exit_code_2() {
    let dir = tempfile::tempdir().unwrap();
    envini_cmd()
        .arg(dir.path().join("absent.ini"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read config file"));
}

/// Test that a malformed line returns exit code 3.
#[test]
fn test_parse_error_returns_exit_code_3() {
    let file = ini_file("= orphan value\n");
    envini_cmd()
        .arg(file.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("empty key"));
}

/// Test that an uncoercible value returns exit code 4.
#[test]
fn test_coercion_error_returns_exit_code_4() {
    let file = ini_file("lucky_agent = abc\n");
    envini_cmd()
        .arg(file.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("lucky_agent"));
}

/// Test that a bad environment override also returns exit code 4.
#[test]
fn test_bad_environment_override_returns_exit_code_4() {
    let file = ini_file(EXAMPLE_INI);
    envini_cmd()
        .env("THE_ANSWER", "1000")
        .arg(file.path())
        .assert()
        .code(4);
}

/// Test that an unknown flag is a general error, distinct from a read failure.
#[test]
fn test_usage_error_returns_exit_code_1() {
    envini_cmd()
        .arg("--no-such-flag")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--no-such-flag"));
}

/// Test that an invalid --output value is also a general error.
#[test]
fn test_invalid_output_value_returns_exit_code_1() {
    envini_cmd()
        .args(["-o", "yaml", "env.ini"])
        .assert()
        .code(1);
}

/// Test that an override for a key missing from the file leaves the field alone.
#[test]
fn test_environment_override_without_stored_key_is_ignored() {
    let file = ini_file("[Book of Numbers]\nfloat_test = 1.5\n");
    let output = envini_cmd()
        .env("THE_ANSWER", "7")
        .arg("--show-config")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let (_, config) = stdout.split_once("config as JSON:\n").unwrap();
    let json: serde_json::Value = serde_json::from_str(config.trim()).unwrap();
    assert_eq!(json["BookOfNumbers"]["TheAnswer"], 0);
}
