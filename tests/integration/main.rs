//! Integration tests for the ecotrack CLI
//!
//! These tests run the binary end to end with an isolated config, no vision
//! API key and evidence files in a temp directory.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create an ecotrack command with an isolated environment
fn ecotrack(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("ecotrack"));
    cmd.env("ECOTRACK_CONFIG", home.join("config.toml"))
        .env("ECOTRACK_USER", "sarah@")
        .env_remove("GOOGLE_VISION_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to write a fake evidence file
fn evidence(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]).unwrap();
    path
}

/// Helper to write a three-task catalog worth 100, 75 and 50 points
fn three_task_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("tasks.toml");
    fs::write(
        &path,
        r#"
[[task]]
id = "1"
name = "Zero Waste Day"
points = 100
icon = "trash"
[task.metrics]
water_saved = 50

[[task]]
id = "2"
name = "Public Transport Usage"
points = 75
icon = "train"
[task.metrics]
carbon_score = 30

[[task]]
id = "3"
name = "Carpooling Initiative"
points = 50
icon = "car"
[task.metrics]
carbon_score = 20
"#,
    )
    .unwrap();
    path
}

fn pair(id: &str, path: &Path) -> String {
    format!("{id}={}", path.display())
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    ecotrack(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ecotrack v"));
}

#[test]
fn test_version_json() {
    let temp = TempDir::new().unwrap();
    ecotrack(temp.path())
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

// =============================================================================
// TASKS
// =============================================================================

#[test]
fn test_tasks_lists_builtin_catalog() {
    let temp = TempDir::new().unwrap();
    ecotrack(temp.path())
        .arg("tasks")
        .assert()
        .success()
        .stdout(predicate::str::contains("0/5 completed"))
        .stdout(predicate::str::contains("Zero Waste Day"))
        .stdout(predicate::str::contains("Carbon Emission Check"));
}

#[test]
fn test_tasks_show_json() {
    let temp = TempDir::new().unwrap();
    let output = ecotrack(temp.path())
        .args(["--json", "tasks", "show", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["task"]["name"], "Plastic-Free Day");
    assert_eq!(json["task"]["metrics"]["trees_saved"], 1);
    assert_eq!(json["task"]["state"], "pending");
}

#[test]
fn test_tasks_show_unknown() {
    let temp = TempDir::new().unwrap();
    ecotrack(temp.path())
        .args(["tasks", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("task not found: 99"));
}

#[test]
fn test_catalog_from_flag() {
    let temp = TempDir::new().unwrap();
    let catalog = three_task_catalog(temp.path());
    ecotrack(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("tasks")
        .assert()
        .success()
        .stdout(predicate::str::contains("0/3 completed"));
}

#[test]
fn test_catalog_from_config() {
    let temp = TempDir::new().unwrap();
    let catalog = three_task_catalog(temp.path());
    fs::write(
        temp.path().join("config.toml"),
        format!("catalog = {:?}\n", catalog.display().to_string()),
    )
    .unwrap();

    ecotrack(temp.path())
        .arg("tasks")
        .assert()
        .success()
        .stdout(predicate::str::contains("0/3 completed"));
}

#[test]
fn test_relative_catalog_in_config_is_found_from_any_directory() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    three_task_catalog(temp.path());
    fs::write(temp.path().join("config.toml"), "catalog = \"tasks.toml\"\n").unwrap();

    ecotrack(temp.path())
        .current_dir(elsewhere.path())
        .arg("tasks")
        .assert()
        .success()
        .stdout(predicate::str::contains("0/3 completed"));
}

#[test]
fn test_bad_catalog() {
    let temp = TempDir::new().unwrap();
    let catalog = temp.path().join("broken.toml");
    fs::write(&catalog, "[[task]]\nid = \"1\"\n").unwrap();

    ecotrack(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("tasks")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load task catalog"));
}

// =============================================================================
// SUBMIT
// =============================================================================

#[test]
fn test_submit_three_tasks_scores_125() {
    let temp = TempDir::new().unwrap();
    let catalog = three_task_catalog(temp.path());
    let a = evidence(temp.path(), "bin.jpg");
    let b = evidence(temp.path(), "bus.jpg");
    let c = evidence(temp.path(), "car.png");

    ecotrack(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("submit")
        .args([pair("1", &a), pair("2", &b), pair("3", &c)])
        .assert()
        .success()
        .stdout(predicate::str::contains("+100 points added!"))
        .stdout(predicate::str::contains("+75 points added!"))
        .stdout(predicate::str::contains("-50 points deducted!"))
        .stdout(predicate::str::contains("Could not analyze the image."))
        .stdout(predicate::str::contains("Points: 125"))
        .stdout(predicate::str::contains("Carbon: 50"));
}

#[test]
fn test_submit_json_reports_metrics() {
    let temp = TempDir::new().unwrap();
    let catalog = three_task_catalog(temp.path());
    let a = evidence(temp.path(), "bin.jpg");

    let output = ecotrack(temp.path())
        .arg("--json")
        .arg("--catalog")
        .arg(&catalog)
        .arg("submit")
        .arg(pair("1", &a))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["user"], "sarah@");
    assert_eq!(json["metrics"]["points"], 100);
    assert_eq!(json["metrics"]["water_saved"], 50);
    assert_eq!(json["submissions"][0]["outcome"]["ordinal"], 1);
    assert_eq!(json["submissions"][0]["outcome"]["task"]["state"], "verified");
    assert_eq!(json["submissions"][0]["outcome"]["verification"]["status"], "no_labels");
}

#[test]
fn test_submit_same_task_twice_is_rejected() {
    let temp = TempDir::new().unwrap();
    let a = evidence(temp.path(), "first.jpg");
    let b = evidence(temp.path(), "second.jpg");

    ecotrack(temp.path())
        .arg("submit")
        .args([pair("1", &a), pair("1", &b)])
        .assert()
        .failure()
        .stdout(predicate::str::contains("rejected: task already completed: 1"))
        .stdout(predicate::str::contains("Points: 100"))
        .stderr(predicate::str::contains("1 of 2 submission(s) rejected"));
}

#[test]
fn test_submit_video_skips_detection() {
    let temp = TempDir::new().unwrap();
    let clip = evidence(temp.path(), "ride.mp4");

    ecotrack(temp.path())
        .arg("submit")
        .arg(pair("2", &clip))
        .assert()
        .success()
        .stdout(predicate::str::contains("Verification skipped"))
        .stdout(predicate::str::contains("+75 points added!"));
}

#[test]
fn test_submit_unsupported_file() {
    let temp = TempDir::new().unwrap();
    let notes = evidence(temp.path(), "notes.txt");

    ecotrack(temp.path())
        .arg("submit")
        .arg(pair("1", &notes))
        .assert()
        .failure()
        .stdout(predicate::str::contains("unsupported media type"))
        .stdout(predicate::str::contains("Points: 0"));
}

#[test]
fn test_submit_missing_file() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.jpg");

    ecotrack(temp.path())
        .arg("submit")
        .arg(pair("1", &missing))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to read"));
}

#[test]
fn test_submit_requires_session() {
    let temp = TempDir::new().unwrap();
    let a = evidence(temp.path(), "bin.jpg");

    ecotrack(temp.path())
        .env_remove("ECOTRACK_USER")
        .arg("submit")
        .arg(pair("1", &a))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn test_submit_requires_pairs() {
    let temp = TempDir::new().unwrap();
    ecotrack(temp.path())
        .args(["submit", "photo.jpg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TASK_ID=PATH"));
}

// =============================================================================
// CHALLENGES, LEADERBOARD, STATUS
// =============================================================================

#[test]
fn test_challenges_list() {
    let temp = TempDir::new().unwrap();
    ecotrack(temp.path())
        .arg("challenges")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eco Streak Master"))
        .stdout(predicate::str::contains("Progress: 45%"));
}

#[test]
fn test_challenges_join() {
    let temp = TempDir::new().unwrap();
    ecotrack(temp.path())
        .args(["challenges", "join", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Joined Monthly Green Goals!"));

    ecotrack(temp.path())
        .args(["challenges", "join", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_leaderboard() {
    let temp = TempDir::new().unwrap();
    ecotrack(temp.path())
        .arg("leaderboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("sarah@"))
        .stdout(predicate::str::contains("(you)"))
        .stdout(predicate::str::contains("crown"));
}

#[test]
fn test_status() {
    let temp = TempDir::new().unwrap();
    ecotrack(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as sarah@"))
        .stdout(predicate::str::contains("Theme: spring (top user)"))
        .stdout(predicate::str::contains("Label detection: disabled"));
}
