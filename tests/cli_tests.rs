//! Tests that drive the compiled binary

use resume_ranker::Config;
use std::process::Command;

fn ranker() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_resume-ranker"));
    command.env("RUST_LOG", "error");
    command
}

#[test]
fn test_config_reset_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let output = ranker()
        .arg("--config")
        .arg(&path)
        .args(["config", "reset"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let written = Config::load_from(&path).unwrap();
    assert_eq!(written.catalog, Config::default().catalog);
}

#[test]
fn test_config_path_does_not_need_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let output = ranker()
        .arg("--config")
        .arg(&path)
        .args(["config", "path"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), path.display().to_string());
    assert!(!path.exists());
}

#[test]
fn test_config_show_requires_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let output = ranker()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
