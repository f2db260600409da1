//! Integration tests for the export command (CLI)

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{chatx, fixture_path, run_chatx};

fn fixture_arg(name: &str) -> String {
    fixture_path(name).to_string_lossy().into_owned()
}

// ============================================================================
// Successful exports
// ============================================================================

#[test]
fn export_to_stdout_prints_json_and_summary() {
    let (stdout, stderr, exit_code) = run_chatx(&["export", &fixture_arg("claude"), "--stdout"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is JSON");
    assert_eq!(value["platform"], "claude");
    assert_eq!(value["title"], "Trait objects vs generics");
    assert_eq!(value["sessions"].as_array().unwrap().len(), 2);
    assert!(stderr.contains("Exported 2 Q&A pairs from claude: Trait objects vs generics"));
}

#[test]
fn export_date_is_rfc3339_millis_utc() {
    let (stdout, _stderr, exit_code) = run_chatx(&["export", &fixture_arg("gemini"), "--stdout"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let date = value["exportDate"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(date).is_ok());
    assert!(date.ends_with('Z'));
    assert_eq!(date.len(), "2026-10-17T09:30:00.000Z".len());
}

#[test]
fn piped_output_skips_clipboard() {
    // stdout is a pipe here, so the JSON is printed even without --stdout.
    chatx()
        .args(["export", &fixture_arg("chatgpt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"platform\": \"chatgpt\""))
        .stderr(predicate::str::contains("Exported 2 Q&A pairs from chatgpt"));
}

#[test]
fn platform_flag_overrides_detection() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("page.json");
    let json = std::fs::read_to_string(fixture_path("claude"))
        .unwrap()
        .replace("https://claude.ai/chat/", "https://example.com/mirror/");
    std::fs::write(&snapshot, json).unwrap();

    chatx()
        .args(["export", snapshot.to_str().unwrap(), "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported source"));

    chatx()
        .args(["export", snapshot.to_str().unwrap(), "--platform", "claude", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"platform\": \"claude\""));
}

#[test]
fn keys_keep_declared_order() {
    let (stdout, _stderr, _) = run_chatx(&["export", &fixture_arg("claude"), "--stdout"]);

    let title = stdout.find("\"title\"").unwrap();
    let platform = stdout.find("\"platform\"").unwrap();
    let date = stdout.find("\"exportDate\"").unwrap();
    let sessions = stdout.find("\"sessions\"").unwrap();
    assert!(title < platform && platform < date && date < sessions);
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn empty_page_exits_1_with_no_conversation_message() {
    let (stdout, stderr, exit_code) = run_chatx(&["export", &fixture_arg("empty"), "--stdout"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("No conversation found"));
}

#[test]
fn unsupported_host_exits_1() {
    let (_stdout, stderr, exit_code) =
        run_chatx(&["export", &fixture_arg("unsupported"), "--stdout"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Unsupported source"));
    assert!(stderr.contains("copilot.microsoft.com"));
}

#[test]
fn unknown_platform_flag_is_rejected_by_parser() {
    let (_stdout, stderr, exit_code) =
        run_chatx(&["export", &fixture_arg("claude"), "--platform", "bard"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Unsupported source"));
}

#[test]
fn missing_snapshot_exits_1_with_path() {
    let (_stdout, stderr, exit_code) = run_chatx(&["export", "nonexistent.json"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("not found"));
    assert!(stderr.contains("nonexistent.json"));
}

#[test]
fn malformed_snapshot_exits_1() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("broken.json");
    std::fs::write(&snapshot, "{ not json").unwrap();

    chatx()
        .args(["export", snapshot.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid snapshot JSON"));
}

#[test]
fn snapshot_without_url_needs_platform_flag() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("nourl.json");
    std::fs::write(&snapshot, r#"{ "root": { "tag": "body" } }"#).unwrap();

    chatx()
        .args(["export", snapshot.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("pass --platform"));
}

#[test]
fn export_no_arguments_shows_usage_error() {
    let (_stdout, stderr, exit_code) = run_chatx(&["export"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<SNAPSHOT>"));
}
