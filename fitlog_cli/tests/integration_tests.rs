//! Integration tests for the fitlog binary.
//!
//! These tests verify end-to-end behavior including:
//! - The multi-user tracking session and its final live count
//! - The single-user session
//! - The non-interactive quick report
//! - Config file and format overrides

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a directory for config files
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fitlog"));
    // Keep the user's own config out of the tests
    cmd.env(
        "XDG_CONFIG_HOME",
        std::env::temp_dir().join("fitlog-tests-no-config"),
    );
    cmd
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise log and calorie tracker"));
}

#[test]
fn test_default_command_is_track() {
    cli()
        .write_stdin("1\nalice\n30\n60\n165\nn\n1\n30\ny\n2\n20\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the number of users: "))
        .stdout(predicate::str::contains("Progress for User 1"))
        .stdout(predicate::str::contains("Total Calories Burned: 340\n"))
        .stdout(predicate::str::contains(
            "Total number of users at the end: 0",
        ));
}

#[test]
fn test_track_premium_user() {
    cli()
        .arg("track")
        .write_stdin("1\nbob\n40\n80\n180\ny\n1\n10\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Premium User: bob (1.5x calorie burn benefit)\nUser: bob\nTotal Calories Burned: 120\n",
        ));
}

#[test]
fn test_track_without_premium_prompt() {
    cli()
        .args(["track", "--no-premium-prompt"])
        .write_stdin("1\ncarol\n25\n55\n160\n2\n10\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Is this user premium?").not())
        .stdout(predicate::str::contains("Total Calories Burned: 50\n"));
}

#[test]
fn test_track_survives_garbage_and_eof() {
    cli()
        .arg("track")
        .write_stdin("2\ndan\nold\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total number of users at the end: 0",
        ));
}

#[test]
fn test_track_survives_invalid_utf8_name() {
    let mut input = b"2\nalice\n30\n60\n165\nn\n1\n30\nn\nJos".to_vec();
    input.extend_from_slice(b"\xe9\n40\n80\n180\nn\n2\n10\nn\n");

    cli()
        .arg("track")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("User: alice\nTotal Calories Burned: 240\n"))
        .stdout(predicate::str::contains("Total Calories Burned: 50\n"))
        .stdout(predicate::str::contains(
            "Total number of users at the end: 0",
        ));
}

#[test]
fn test_track_json_keeps_prompts_off_stdout() {
    let output = cli()
        .args(["--format", "json", "track"])
        .write_stdin("1\nida\n30\n60\n165\ny\n1\n10\nn\n")
        .output()
        .expect("Failed to run fitlog");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["live_profiles"], 0);
    assert_eq!(value["profiles"][0]["total_calories"], 120.0);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Enter the number of users: "));
}

#[test]
fn test_solo_session() {
    cli()
        .arg("solo")
        .write_stdin("Ada Lovelace\n36\n55\n165\n1\n30\ny\n2\n20\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "User: Ada Lovelace\nTotal Calories Burned: 340\n",
        ))
        .stdout(predicate::str::contains("Total number of users").not());
}

#[test]
fn test_quick_text_report() {
    cli()
        .args(["quick", "--name", "eve", "-e", "cardio:30", "-e", "strength:20"])
        .assert()
        .success()
        .stdout(
            "User: eve\n\
             Total Calories Burned: 340\n\
             Exercise: Cardio, Duration: 30 minutes, Calories Burned: 240\n\
             Exercise: Strength, Duration: 20 minutes, Calories Burned: 100\n",
        );
}

#[test]
fn test_quick_json_report() {
    let output = cli()
        .args([
            "quick", "--name", "fay", "--premium", "--format", "json", "-e", "cardio:10",
        ])
        .output()
        .expect("Failed to run fitlog");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["tier"], "premium");
    assert_eq!(value["total_calories"], 120.0);
    assert_eq!(value["records"][0]["calories_burned"], 80.0);
}

#[test]
fn test_quick_rejects_unknown_exercise() {
    cli()
        .args(["quick", "--name", "gus", "-e", "swim:10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown exercise kind"));
}

#[test]
fn test_config_file_sets_format() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[report]\nformat = \"json\"\n").expect("Failed to write config");

    cli()
        .arg("--config")
        .arg(&config_path)
        .args(["quick", "--name", "hal", "-e", "strength:4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_calories\": 20.0"));
}

#[test]
fn test_format_flag_overrides_config() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[report]\nformat = \"json\"\n").expect("Failed to write config");

    cli()
        .arg("--config")
        .arg(&config_path)
        .args(["--format", "text", "quick", "--name", "ida", "-e", "cardio:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Calories Burned: 8\n"));
}

#[test]
fn test_config_can_hide_live_count_and_premium_prompt() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[report]\nshow_live_count = false\n\n[prompt]\nask_premium = false\n",
    )
    .expect("Failed to write config");

    cli()
        .arg("--config")
        .arg(&config_path)
        .arg("track")
        .write_stdin("1\njo\n20\n70\n170\n1\n5\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Calories Burned: 40\n"))
        .stdout(predicate::str::contains("Is this user premium?").not())
        .stdout(predicate::str::contains("Total number of users").not());
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("--config")
        .arg(temp_dir.path().join("missing.toml"))
        .args(["quick", "--name", "kim"])
        .assert()
        .failure();
}
