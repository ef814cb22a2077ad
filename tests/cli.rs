//! Binary E2E tests
//!
//! Each test runs `check_version_is` with a temporary directory as the working
//! directory, so the manifest it reads is fully controlled by the test.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn workspace_with_manifest(content: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("Cargo.toml"), content).unwrap();
    temp_dir
}

fn check_version_is(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_check_version_is"));
    cmd.current_dir(dir.path()).env_remove("CHECK_VERSION_IS_LOG");
    cmd
}

#[test]
fn matching_tag_with_prefix_succeeds() {
    let dir = workspace_with_manifest("[package]\nname = \"demo\"\nversion = \"1.2.3\"\n");

    check_version_is(&dir)
        .arg("v1.2.3")
        .assert()
        .success()
        .stdout(predicate::str::contains("Argument version: 'v1.2.3'"))
        .stdout(predicate::str::contains("Cargo.toml version: '1.2.3'"))
        .stdout(predicate::str::ends_with(
            "Success: Tag version matches Cargo.toml version.\n",
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn matching_tag_without_prefix_succeeds() {
    let dir = workspace_with_manifest("version = \"0.0.57\"\n");

    check_version_is(&dir).arg("0.0.57").assert().success();
}

#[test]
fn mismatched_tag_fails_with_both_versions() {
    let dir = workspace_with_manifest("[package]\nversion = \"1.2.3\"\n");

    check_version_is(&dir)
        .arg("1.2.4")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: version mismatch. Tag is '1.2.4', but Cargo.toml is '1.2.3'.",
        ));
}

#[test]
fn missing_argument_prints_usage() {
    let dir = TempDir::new().unwrap();

    check_version_is(&dir)
        .assert()
        .code(1)
        .stdout("Usage: check_version_is <version>\n");
}

#[test]
fn manifest_without_version_line_fails() {
    let dir = workspace_with_manifest("");

    check_version_is(&dir)
        .arg("1.0.0")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not find a valid"));
}

#[test]
fn missing_manifest_exits_with_distinct_code() {
    let dir = TempDir::new().unwrap();

    check_version_is(&dir)
        .arg("1.0.0")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Could not find").not())
        .stderr(predicate::str::contains("failed to read Cargo.toml"));
}

#[test]
fn logging_goes_to_stderr_only() {
    let dir = workspace_with_manifest("version = \"1.0.0\"\n");

    check_version_is(&dir)
        .env("CHECK_VERSION_IS_LOG", "debug")
        .arg("v1.0.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("Reading manifest"));
}

#[test]
fn invalid_log_directive_warns_and_still_checks() {
    let dir = workspace_with_manifest("version = \"1.0.0\"\n");

    check_version_is(&dir)
        .env("CHECK_VERSION_IS_LOG", "check_version_is=notalevel")
        .arg("v1.0.0")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "Success: Tag version matches Cargo.toml version.\n",
        ))
        .stderr(predicate::str::contains("Warning: logging disabled"));
}

#[test]
fn invalid_log_directive_keeps_mismatch_exit_code() {
    let dir = workspace_with_manifest("version = \"1.0.0\"\n");

    check_version_is(&dir)
        .env("CHECK_VERSION_IS_LOG", "check_version_is=notalevel")
        .arg("2.0.0")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: version mismatch."));
}

#[test]
fn help_flag_is_checked_as_tag() {
    let dir = workspace_with_manifest("version = \"1.0.0\"\n");

    check_version_is(&dir)
        .arg("--help")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Argument version: '--help'\n"));
}

#[test]
fn manifest_with_byte_order_mark_is_echoed_escaped() {
    let dir = workspace_with_manifest("\u{feff}[package]\nversion = \"1.0.0\"\n");

    check_version_is(&dir)
        .arg("v1.0.0")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cargo.toml: '\\ufeff[package]\\nversion = \"1.0.0\"\\n'\n",
        ));
}
