//! Command line behavior of the binary that does not need a terminal.

use std::process::Command;

fn gloom() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gloom"))
}

#[test]
fn test_version_flag() {
    let output = gloom().arg("--version").output().expect("Failed to execute binary");

    assert!(output.status.success(), "Version flag should exit with code 0");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = stdout.trim().strip_prefix("gloom ").unwrap_or("");
    assert_eq!(version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_help_flag_prints_usage() {
    let output = gloom().arg("-h").output().expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "unexpected help output: {}", stdout);
}

#[test]
fn test_missing_tag_exits_with_usage_error() {
    let output = gloom().arg("acme/widget").output().expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("gloom: "), "unexpected stderr: {}", stderr);
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = gloom().arg("--frobnicate").output().expect("Failed to execute binary");
    assert_eq!(output.status.code(), Some(2));
}
