//! Integration tests for the auxiliary commands (CLI)

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{chatx, run_chatx};

#[test]
fn platforms_lists_every_platform_with_hosts() {
    let (stdout, _stderr, exit_code) = run_chatx(&["platforms"]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout, @r"
    chatgpt  chatgpt.com, chat.openai.com
    claude   claude.ai
    gemini   gemini.google.com
    ");
}

#[test]
fn config_show_prints_defaults_when_file_is_missing() {
    let (stdout, _stderr, exit_code) = run_chatx(&["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[extraction]"));
    assert!(stdout.contains("min_assistant_chars = 10"));
    assert!(stdout.contains("[output]"));
    assert!(stdout.contains("clipboard = true"));
}

#[test]
fn config_path_honors_env_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");

    chatx()
        .env("CHATX_CONFIG", &path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_file_changes_thresholds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[extraction]\nmin_assistant_chars = 40\n").unwrap();

    let fixture = crate::helpers::fixture_path("chatgpt");
    chatx()
        .env("CHATX_CONFIG", &path)
        .args(["export", fixture.to_str().unwrap(), "--stdout"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported 1 Q&A pairs"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[extraction\n").unwrap();

    chatx()
        .env("CHATX_CONFIG", &path)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn completions_generate_for_bash() {
    chatx()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chatx"));
}

#[test]
fn verbose_flag_emits_debug_logs() {
    let fixture = crate::helpers::fixture_path("claude");
    chatx()
        .args(["-v", "export", fixture.to_str().unwrap(), "--stdout"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Selected platform"));
}

#[test]
fn version_starts_with_binary_name() {
    chatx()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("chatx "));
}
