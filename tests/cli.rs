//! End-to-end tests for the `quickadd` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NOW: &str = "2025-06-10T09:30:00+00:00";

fn quickadd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("quickadd").unwrap();
    cmd.env_remove("QUICKADD_LOG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(config_dir.path().join("config.yaml"));
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// parse
// ============================================================================

#[test]
fn parse_json_extracts_schedule() {
    let dir = TempDir::new().unwrap();
    let value = json_output(quickadd(&dir).args(["-o", "json", "parse", "Call mom tomorrow 14:00", "--now", NOW]));

    assert_eq!(value["title"], "Call mom");
    assert_eq!(value["date"], "2025-06-11");
    assert_eq!(value["time"], "14:00");
}

#[test]
fn parse_json_range_list_tags_priority() {
    let dir = TempDir::new().unwrap();
    let value = json_output(quickadd(&dir).args([
        "parse",
        "Team sync 14:00-15:00 @Work #sales !!!",
        "--now",
        NOW,
        "--output",
        "json",
    ]));

    assert_eq!(value["title"], "Team sync");
    assert_eq!(value["startAt"], "2025-06-10T14:00:00+00:00");
    assert_eq!(value["endAt"], "2025-06-10T15:00:00+00:00");
    assert_eq!(value["listHint"], "Work");
    assert_eq!(value["tags"], serde_json::json!(["sales"]));
    assert_eq!(value["priority"], 3);
}

#[test]
fn parse_pretty_is_default() {
    let dir = TempDir::new().unwrap();
    quickadd(&dir)
        .args(["parse", "31.12.2025 Plan party", "--now", NOW])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan party"))
        .stdout(predicate::str::contains("2025-12-31"));
}

#[test]
fn parse_uses_default_output_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.yaml"), "general:\n  default_output: json\n").unwrap();

    let value = json_output(quickadd(&dir).args(["parse", "Buy milk", "--now", NOW]));
    assert_eq!(value, serde_json::json!({ "title": "Buy milk" }));
}

#[test]
fn parse_rejects_bad_reference_instant() {
    let dir = TempDir::new().unwrap();
    quickadd(&dir)
        .args(["parse", "Buy milk", "--now", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RFC 3339"));
}

// ============================================================================
// draft
// ============================================================================

#[test]
fn draft_merges_overrides() {
    let dir = TempDir::new().unwrap();
    let value = json_output(quickadd(&dir).args([
        "-o", "json", "draft", "report fri !", "--now", NOW, "--priority", "2", "--tag", "q2", "--focus",
    ]));

    assert_eq!(value["title"], "report");
    assert_eq!(value["date"], "2025-06-13");
    assert_eq!(value["allDay"], true);
    assert_eq!(value["priority"], 2);
    assert_eq!(value["tags"], serde_json::json!(["q2"]));
    assert_eq!(value["focusFlag"], true);
}

#[test]
fn draft_schedules_bare_time_on_selected_day() {
    let dir = TempDir::new().unwrap();
    let value = json_output(quickadd(&dir).args([
        "-o", "json", "draft", "Sync 14:00-15:00", "--now", NOW, "--on", "2025-06-20",
    ]));

    assert_eq!(value["date"], "2025-06-20");
    assert_eq!(value["startAt"], "2025-06-20T14:00:00+00:00");
    assert_eq!(value["endAt"], "2025-06-20T15:00:00+00:00");
}

#[test]
fn draft_keeps_date_written_in_text() {
    let dir = TempDir::new().unwrap();
    let value = json_output(quickadd(&dir).args([
        "-o", "json", "draft", "Call mom tomorrow 14:00", "--now", NOW, "--on", "2025-06-20",
    ]));

    assert_eq!(value["date"], "2025-06-11");
    assert_eq!(value["startAt"], "2025-06-11T14:00:00+00:00");
}

#[test]
fn draft_with_blank_title_fails() {
    let dir = TempDir::new().unwrap();
    quickadd(&dir)
        .args(["draft", "anything", "--title", " ", "--now", NOW])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no task title found"));
}

// ============================================================================
// config and completions
// ============================================================================

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();
    quickadd(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default configuration"));

    quickadd(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("port: 8787"));
}

#[test]
fn invalid_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.yaml"), "general: [not, a, map]\n").unwrap();

    quickadd(&dir)
        .args(["parse", "Buy milk"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("loading configuration"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    quickadd(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quickadd"));
}
