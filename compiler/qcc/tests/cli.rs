//! End-to-end runs of the `qcc` binary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

fn qcc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qcc"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("QCC_MAX_DEPTH")
        .output()
        .expect("qcc should start")
}

fn write(dir: &TempDir, name: &str, text: &str) -> String {
    let path: PathBuf = dir.path().join(name);
    std::fs::write(&path, text).unwrap();
    path.display().to_string()
}

#[test]
fn test_parse_success_exit_code() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "ok.qc", "void() main = { if (x) f(); };");
    let output = qcc(&["parse", &path]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "(decl void() (main (block (if x (call f)))))\n"
    );
}

#[test]
fn test_failure_exit_code_and_diagnostic() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.qc", "a = 1");
    let output = qcc(&["--color", "never", "check", &path]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[E1002]: expected `;`, found end of input"));
}

#[test]
fn test_max_depth_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "deep.qc", "x = ((1));");
    let output = Command::new(env!("CARGO_BIN_EXE_qcc"))
        .args(["--color", "never", "parse", path.as_str()])
        .env_remove("RUST_LOG")
        .env("QCC_MAX_DEPTH", "3")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("E1007"));
}

#[test]
fn test_missing_arguments() {
    let output = qcc(&["check"]);
    assert!(!output.status.success());
}
