use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn list_output(page: &str) -> String {
    let output = cargo_bin_cmd!()
        .arg("--list")
        .arg("--input")
        .arg(fixture_path("skips.json"))
        .arg("--page")
        .arg(page)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("choosing a skip size"))
        .stdout(predicate::str::contains("--list"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skip-picker"));
}

#[test]
fn test_list_first_page() {
    let stdout = list_output("1");
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "17933\t4 Yard\t£240.5\t14 days");
    assert_eq!(lines[9], "Page 1 of 3");
}

#[test]
fn test_list_last_page_has_remaining_items() {
    let stdout = list_output("3");
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("17951\t22 Yard"));
    assert!(lines[1].starts_with("17952\t23 Yard"));
    assert_eq!(lines[2], "Page 3 of 3");
}

#[test]
fn test_list_page_past_end_prints_no_rows() {
    let stdout = list_output("4");

    assert_eq!(stdout.trim(), "Page 4 of 3");
}

#[test]
fn test_list_empty_catalog() {
    cargo_bin_cmd!()
        .arg("--list")
        .arg("--input")
        .arg(fixture_path("empty.json"))
        .assert()
        .success()
        .stdout("Page 1 of 1\n");
}

#[test]
fn test_page_zero_is_rejected() {
    cargo_bin_cmd!()
        .arg("--list")
        .arg("--page")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--page"));
}

#[test]
fn test_list_with_invalid_json_file() {
    cargo_bin_cmd!()
        .arg("--list")
        .arg("--input")
        .arg(fixture_path("invalid.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid catalog response"));
}

#[test]
fn test_list_with_nonexistent_file() {
    cargo_bin_cmd!()
        .arg("--list")
        .arg("--input")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_fixture_files_exist() {
    assert!(fixture_path("skips.json").exists());
    assert!(fixture_path("empty.json").exists());
    assert!(fixture_path("invalid.json").exists());
}
