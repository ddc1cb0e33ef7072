//! End-to-end tests for the rategate CLI

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn rategate() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("rategate"))
}

/// Command rooted in a temp home with a fixed clock
fn rategate_in(home: &Path) -> assert_cmd::Command {
    let mut cmd = rategate();
    cmd.env("RATEGATE_HOME", home).env("NO_COLOR", "1").args(["--now", "2024-09-10T12:00:00Z"]);
    cmd
}

fn write_config(home: &Path, body: &str) {
    fs::create_dir_all(home).unwrap();
    fs::write(home.join("config.toml"), body).unwrap();
}

const CONFIG: &str = r#"
[policy]
minimum_points = 100
minimum_months = 4

[app]
version = "1.0.0"
build = "1"

[prompt]
title = "AMRatingManager"
message = "Want to give 5 stars to this amazing App?"
confirm_text = "Hell yea!"
dismiss_text = "Mmmm... nope"

[review]
url = "https://example.com/review"
"#;

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    rategate().arg("--version").assert().success().stdout(predicate::str::contains("rategate"));
}

#[test]
fn test_help() {
    rategate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Decide when an app may ask its users for a review"));
}

#[test]
fn test_version_command_matches_library() {
    rategate()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("rategate v{}", rategate::VERSION)));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    rategate_in(temp.path()).assert().success().stdout(predicate::str::contains("rategate v"));
}

#[test]
fn test_init_writes_config() {
    let temp = TempDir::new().unwrap();

    rategate_in(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let content = fs::read_to_string(temp.path().join("config.toml")).unwrap();
    assert!(content.contains("minimum_months = 4"));

    rategate_in(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "[policy\n");

    rategate_in(temp.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

// =============================================================================
// GATING FLOW
// =============================================================================

#[test]
fn test_points_then_check_then_answer() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), CONFIG);

    rategate_in(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("0 of 100 points"));

    rategate_in(temp.path())
        .args(["points", "add", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 60 / 100"));
    rategate_in(temp.path())
        .args(["points", "add", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 100 / 100"));

    rategate_in(temp.path()).arg("check").assert().success().stdout(predicate::str::contains("eligible"));

    rategate_in(temp.path())
        .args(["answer", "decline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prompt declined"))
        .stdout(predicate::str::contains("Leave a review").not());

    rategate_in(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("already asked"));
}

#[test]
fn test_answer_while_ineligible_is_skipped() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), CONFIG);

    for _ in 0..2 {
        rategate_in(temp.path())
            .args(["answer", "accept"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Nothing shown: not eligible: 0 of 100 points"))
            .stdout(predicate::str::contains("Leave a review").not());
    }

    assert!(!temp.path().join("state.json").exists());
}

#[test]
fn test_negative_points_clamp() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), CONFIG);

    rategate_in(temp.path()).args(["points", "add", "5"]).assert().success();
    rategate_in(temp.path())
        .args(["points", "add", "-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 0 / 100"));
}

#[test]
fn test_ask_accept_on_stdin() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), CONFIG);
    rategate_in(temp.path()).args(["points", "add", "150"]).assert().success();

    rategate_in(temp.path())
        .arg("ask")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Want to give 5 stars"))
        .stdout(predicate::str::contains("Leave a review: https://example.com/review"))
        .stdout(predicate::str::contains("Prompt accepted"));

    let state = fs::read_to_string(temp.path().join("state.json")).unwrap();
    assert!(state.contains("1.0.0.1"));
}

#[test]
fn test_ask_skips_when_ineligible() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), CONFIG);

    rategate_in(temp.path())
        .arg("ask")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing shown"))
        .stdout(predicate::str::contains("AMRatingManager").not());
}

#[test]
fn test_ask_direct_requests_review() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), CONFIG);
    rategate_in(temp.path()).args(["points", "add", "100"]).assert().success();

    rategate_in(temp.path())
        .args(["ask", "--direct"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leave a review"))
        .stdout(predicate::str::contains("Prompt requested"));
}

#[test]
fn test_cooldown_through_clock() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), CONFIG);
    rategate_in(temp.path()).args(["points", "add", "100"]).assert().success();
    rategate_in(temp.path()).arg("reset").assert().success();

    let newer = CONFIG.replace("build = \"1\"", "build = \"2\"");
    write_config(temp.path(), &newer);
    rategate_in(temp.path()).args(["points", "add", "100"]).assert().success();

    // Exactly four months later: still cooling down
    rategate()
        .env("RATEGATE_HOME", temp.path())
        .args(["--now", "2025-01-10T12:00:00Z", "check"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("more than 4 required"));

    // Five months later: eligible
    rategate()
        .env("RATEGATE_HOME", temp.path())
        .args(["--now", "2025-02-10T12:00:00Z", "check"])
        .assert()
        .success();
}

// =============================================================================
// STATUS / REMOTE / JSON
// =============================================================================

#[test]
fn test_status_json() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), CONFIG);
    rategate_in(temp.path()).args(["points", "add", "30"]).assert().success();

    let output = rategate_in(temp.path()).args(["--json", "status"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["current_version"], "1.0.0.1");
    assert_eq!(json["state"]["points"], 30);
    assert_eq!(json["eligible"], false);
    assert_eq!(json["eligibility"]["decision"], "not_enough_points");
}

#[test]
fn test_remote_flag() {
    let temp = TempDir::new().unwrap();

    rategate_in(temp.path())
        .args(["remote", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("off"));
    rategate_in(temp.path()).args(["remote", "on"]).assert().success();

    let output = rategate_in(temp.path()).args(["--json", "remote", "show"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["remote_should_show"], true);
}

#[test]
fn test_state_override_flag() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("elsewhere/rating.json");

    rategate_in(temp.path())
        .args(["--state"])
        .arg(&state)
        .args(["points", "add", "3"])
        .assert()
        .success();

    assert!(state.exists());
    assert!(!temp.path().join("state.json").exists());
}
