//! End-to-end checks of the twerp binary that never reach the network.

use std::path::Path;
use std::process::Command;

fn command(args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_twerp"));
    command
        .args(args)
        .env("TWILIO_ACCOUNT_SID", "")
        .env("TWILIO_AUTH_TOKEN", "")
        .env_remove("RUST_LOG");
    command
}

fn twerp(args: &[&str]) -> std::process::Output {
    command(args).output().expect("Failed to execute twerp")
}

/// Run twerp from `dir`, with `dir` also standing in for the home directory.
fn twerp_in(dir: &Path, args: &[&str]) -> std::process::Output {
    command(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .output()
        .expect("Failed to execute twerp")
}

fn broken_config_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".twerp.toml"), "account_sid = [oops\n").unwrap();
    dir
}

#[test]
fn test_no_flags_prints_help_and_exits_2() {
    let output = twerp(&[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.contains("--dial"), "Expected help text, got: {stdout}");
}

#[test]
fn test_unknown_flag_exits_2() {
    let output = twerp(&["--frobnicate"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("--frobnicate"), "got: {stderr}");
    assert!(
        stderr.contains("Voice call options"),
        "Expected full help on stderr, got: {stderr}"
    );
}

#[test]
fn test_version_flag() {
    let output = twerp(&["-V"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.starts_with("twerp version "));
}

#[test]
fn test_dial_without_twiml_exits_1() {
    let output = twerp(&["--dial", "+12135551212"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.contains("--url"),
        "Expected guidance on stderr, got: {stderr}"
    );
}

#[test]
fn test_missing_credentials_exit_1() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "account_sid_env = \"TWERP_CLI_TEST_UNSET\"\n").unwrap();

    let output = twerp(&["--config", config.to_str().unwrap(), "--list-sms"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("credentials"), "got: {stderr}");
}

#[test]
fn test_broken_config_does_not_affect_version() {
    let dir = broken_config_dir();
    let output = twerp_in(dir.path(), &["-V"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with("twerp version "));
}

#[test]
fn test_broken_config_does_not_affect_help() {
    let dir = broken_config_dir();
    let output = twerp_in(dir.path(), &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.contains("--dial"), "Expected help text, got: {stdout}");
}

#[test]
fn test_broken_config_does_not_hide_dial_guidance() {
    let dir = broken_config_dir();
    let output = twerp_in(dir.path(), &["--dial", "+1"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("--url"), "got: {stderr}");
    assert!(!stderr.contains("configuration"), "got: {stderr}");
}

#[test]
fn test_broken_config_fails_remote_actions() {
    let dir = broken_config_dir();
    let output = twerp_in(dir.path(), &["--list-sms"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Failed to load configuration"), "got: {stderr}");
}
