//! Shared helpers for integration tests.

use std::path::PathBuf;
use std::process::Command;

use chatx::SnapshotDocument;

/// Directory holding the snapshot fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Path of a named fixture (`chatgpt` -> `tests/fixtures/chatgpt.json`).
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(format!("{}.json", name))
}

/// Parse a named fixture into a document.
pub fn load_fixture(name: &str) -> SnapshotDocument {
    SnapshotDocument::load(fixture_path(name)).expect("Failed to load fixture")
}

/// A `chatx` command isolated from the user's config and log settings.
pub fn chatx() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chatx"));
    cmd.env("CHATX_CONFIG", fixtures_dir().join("no-such-config.toml"))
        .env_remove("CHATX_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Run chatx and capture (stdout, stderr, exit code).
pub fn run_chatx(args: &[&str]) -> (String, String, i32) {
    let output = chatx().args(args).output().expect("Failed to execute chatx");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
