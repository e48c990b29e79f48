//! CLI tests against the built binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::LS_PWD_EVENTS;

/// Write the events fixture and an empty config into a temp dir.
fn fixture() -> (TempDir, String, String) {
    let temp = TempDir::new().unwrap();
    let events = temp.path().join("session.ndjson");
    std::fs::write(&events, LS_PWD_EVENTS).unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "").unwrap();
    (
        temp,
        events.to_string_lossy().to_string(),
        config.to_string_lossy().to_string(),
    )
}

fn blockterm() -> Command {
    let mut cmd = Command::cargo_bin("blockterm").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn replay_plain_prints_blocks() {
    let (_temp, events, config) = fixture();
    let output = blockterm()
        .args(["replay", &events, "--plain", "--config", &config])
        .output()
        .unwrap();
    assert!(output.status.success());
    insta::assert_snapshot!(String::from_utf8_lossy(&output.stdout), @r"
    $ ls
    a.txt
    [ok]
    $ pwd
    [running]
    ");
}

#[test]
fn replay_reads_stdin() {
    let (_temp, _events, config) = fixture();
    blockterm()
        .args(["replay", "-", "--config", &config])
        .write_stdin(LS_PWD_EVENTS)
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("[running]"));
}

#[test]
fn document_lists_segments() {
    let (_temp, events, config) = fixture();
    blockterm()
        .args(["document", &events, "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("block   0  output  5..11"))
        .stdout(predicate::str::ends_with("total 17\n"));
}

#[test]
fn copy_prints_range_text() {
    let (_temp, events, config) = fixture();
    blockterm()
        .args([
            "copy", &events, "--start", "5", "--end", "17", "--config", &config,
        ])
        .assert()
        .success()
        .stdout("a.txt\npwd\n");
}

#[test]
fn invalid_lines_are_skipped_with_warning() {
    let temp = TempDir::new().unwrap();
    let events = temp.path().join("bad.ndjson");
    std::fs::write(
        &events,
        "garbage\n{\"type\":\"output\",\"data\":\"still here\\n\"}\n",
    )
    .unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "").unwrap();

    blockterm()
        .args(["replay"])
        .arg(&events)
        .args(["--plain", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("still here"))
        .stderr(predicate::str::contains("Skipped invalid event"));
}

#[test]
fn missing_events_file_fails() {
    let (_temp, _events, config) = fixture();
    blockterm()
        .args(["replay", "/nonexistent/events.ndjson", "--config", &config])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open events file"));
}

#[test]
fn config_show_prints_sections() {
    let (_temp, _events, config) = fixture();
    blockterm()
        .args(["config", "show", "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("[render]"))
        .stdout(predicate::str::contains("autoscroll_step = 3"));
}

#[test]
fn config_path_echoes_override() {
    let (_temp, _events, config) = fixture();
    blockterm()
        .args(["config", "path", "--config", &config])
        .assert()
        .success()
        .stdout(format!("{config}\n"));
}
