//! Integration tests for the ncc-quiz CLI
//!
//! Each test points the binary at a data file inside a temp dir and at a
//! config path that does not exist, so the user's own config never leaks in.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create an ncc-quiz command isolated in `dir`
fn ncc_quiz(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("ncc-quiz"));
    cmd.current_dir(dir)
        .env_remove("NCC_QUIZ_DATA")
        .arg("--config")
        .arg(dir.join("missing-config.toml"));
    cmd
}

/// Write a data file with two ranked cadets and return its path
fn seed_data(dir: &Path) -> PathBuf {
    let path = dir.join("ncc_data.json");
    fs::write(
        &path,
        r#"{
    "institutions": {"111": {"name": "Delhi Academy"}},
    "cadets": {
        "222": {"name": "Asha", "college": "Delhi Academy", "scores": {"GK1": 1}},
        "333": {"name": "Ravi", "college": "Pune", "scores": {"GK1": 1, "GK2": 2}}
    },
    "quizzes": [
        {"institution": "111", "quiz_name": "GK1", "questions": ["Capital of India?"], "answers": ["delhi"]},
        {"institution": "111", "quiz_name": "GK2", "questions": ["a", "b"], "answers": ["x", "y"]}
    ]
}"#,
    )
    .unwrap();
    path
}

// =============================================================================
// VERSION
// =============================================================================

#[test]
fn test_version_command() {
    let temp = TempDir::new().unwrap();
    ncc_quiz(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ncc-quiz v"));
}

#[test]
fn test_version_json() {
    let temp = TempDir::new().unwrap();
    ncc_quiz(temp.path())
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_no_command_prints_hint() {
    let temp = TempDir::new().unwrap();
    ncc_quiz(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--help"));
}

// =============================================================================
// STATUS
// =============================================================================

#[test]
fn test_status_missing_data_file_is_empty() {
    let temp = TempDir::new().unwrap();
    ncc_quiz(temp.path())
        .args(["status", "--data"])
        .arg(temp.path().join("nothing.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Cadets:       0"));
}

#[test]
fn test_status_json_counts() {
    let temp = TempDir::new().unwrap();
    let data = seed_data(temp.path());

    let output = ncc_quiz(temp.path())
        .args(["--json", "status", "--data"])
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["stats"]["institutions"], 1);
    assert_eq!(value["stats"]["cadets"], 2);
    assert_eq!(value["stats"]["quizzes"], 2);
}

#[test]
fn test_status_data_from_env() {
    let temp = TempDir::new().unwrap();
    let data = seed_data(temp.path());

    ncc_quiz(temp.path())
        .env("NCC_QUIZ_DATA", &data)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quizzes:      2"));
}

#[test]
fn test_status_corrupt_data_fails() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("ncc_data.json");
    fs::write(&data, "{ broken").unwrap();

    ncc_quiz(temp.path())
        .args(["status", "--data"])
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

// =============================================================================
// LEADERBOARD
// =============================================================================

#[test]
fn test_leaderboard_ranks_by_total() {
    let temp = TempDir::new().unwrap();
    let data = seed_data(temp.path());

    let output = ncc_quiz(temp.path())
        .args(["leaderboard", "--data"])
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let ravi = stdout.find("Ravi").unwrap();
    let asha = stdout.find("Asha").unwrap();
    assert!(ravi < asha);
    assert!(stdout.contains("GK1=1, GK2=2"));
}

#[test]
fn test_leaderboard_empty() {
    let temp = TempDir::new().unwrap();
    ncc_quiz(temp.path())
        .args(["leaderboard", "--data"])
        .arg(temp.path().join("ncc_data.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No cadets registered yet."));
}

#[test]
fn test_leaderboard_does_not_create_data_file() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("ncc_data.json");

    ncc_quiz(temp.path())
        .args(["leaderboard", "--data"])
        .arg(&data)
        .assert()
        .success();
    assert!(!data.exists());
}

#[test]
fn test_unknown_backend_rejected() {
    let temp = TempDir::new().unwrap();
    ncc_quiz(temp.path())
        .args(["leaderboard", "--backend", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown backend"));
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn test_config_file_selects_data_path() {
    let temp = TempDir::new().unwrap();
    seed_data(temp.path());
    let config = temp.path().join("config.toml");
    fs::write(
        &config,
        format!("[storage]\npath = {:?}\n", temp.path().join("ncc_data.json")),
    )
    .unwrap();

    assert_cmd::Command::new(cargo::cargo_bin!("ncc-quiz"))
        .env_remove("NCC_QUIZ_DATA")
        .arg("--config")
        .arg(&config)
        .args(["--json", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cadets\": 2"));
}
