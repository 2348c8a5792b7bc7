#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;

fn seniorbook(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("seniorbook").unwrap();
    cmd.env("SENIORBOOK_HOME", home)
        .env_remove("SENIORBOOK_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_open_on_empty_home() {
    let temp_dir = tempfile::tempdir().unwrap();

    seniorbook(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved data found"));
}

#[test]
fn test_import_then_open() {
    let temp_dir = tempfile::tempdir().unwrap();
    let import_file = temp_dir.path().join("incoming.json");
    fs::write(
        &import_file,
        json!({ "seniors": [
            { "name": "Alice", "phone": "91234567", "address": "Blk 1" },
            { "name": "Bob", "phone": "81234567", "address": "Blk 2" }
        ]})
        .to_string(),
    )
    .unwrap();

    seniorbook(temp_dir.path())
        .arg("import")
        .arg(&import_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 senior(s)"));

    assert!(temp_dir.path().join("seniors.json").exists());
    assert!(temp_dir.path().join("seniors.txt").exists());

    seniorbook(temp_dir.path())
        .arg("open")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 senior(s) from JSON"));
}

#[test]
fn test_import_missing_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    seniorbook(temp_dir.path())
        .arg("import")
        .arg(temp_dir.path().join("missing.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: ").and(predicate::str::contains("missing.json")));
}

#[test]
fn test_strict_text_error_is_reported_on_open() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("seniors.txt"),
        "Bob|not-a-phone|Some Address|bob@x.com\n",
    )
    .unwrap();

    seniorbook(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not load saved data"));

    seniorbook(temp_dir.path())
        .arg("doctor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let env_home = tempfile::tempdir().unwrap();
    let flag_home = tempfile::tempdir().unwrap();

    seniorbook(env_home.path())
        .arg("--data-dir")
        .arg(flag_home.path())
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            flag_home.path().join("seniors.json").display().to_string(),
        ));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp_dir = tempfile::tempdir().unwrap();

    seniorbook(temp_dir.path())
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("not found"));
}
