//! Integration tests for the medscope binary

use assert_cmd::Command;
use predicates::prelude::*;

#[path = "common/mod.rs"]
mod common;

fn medscope() -> Command {
    Command::cargo_bin("medscope").expect("binary builds")
}

#[test]
fn test_help_runs() {
    medscope()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("medscope"));
}

#[test]
fn test_missing_input_is_an_error() {
    medscope()
        .arg("--no-confirm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file is required"));
}

#[test]
fn test_invalid_encoding_rejected() {
    let (_dir, path) = common::write_temp_csv(common::maternal_csv());
    medscope()
        .arg("-i")
        .arg(&path)
        .arg("--encoding")
        .arg("ordinal")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid encoding"));
}

#[test]
fn test_no_confirm_pipeline_runs_all_steps() {
    let (_dir, path) = common::write_temp_csv(common::maternal_csv());
    medscope()
        .arg("-i")
        .arg(&path)
        .arg("--no-confirm")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dataset Statistics"))
        .stdout(predicate::str::contains("Missing Value Handling"))
        .stdout(predicate::str::contains("EDA & Relationships"))
        .stdout(predicate::str::contains("Applied Label Encoding"))
        .stdout(predicate::str::contains("session complete"));
}

#[test]
fn test_no_confirm_with_column_summary() {
    let (_dir, path) = common::write_temp_csv(common::maternal_csv());
    medscope()
        .arg("-i")
        .arg(&path)
        .arg("--no-confirm")
        .arg("--column")
        .arg("Age")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis of Age"))
        .stdout(predicate::str::contains("Age of the patient in years."));
}

#[test]
fn test_one_hot_encoding_flag() {
    let (_dir, path) = common::write_temp_csv(common::maternal_csv());
    medscope()
        .arg("-i")
        .arg(&path)
        .arg("--no-confirm")
        .arg("--encoding")
        .arg("one-hot")
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied One-Hot Encoding"));
}

#[test]
fn test_report_export_writes_valid_json() {
    let (dir, path) = common::write_temp_csv(common::maternal_csv());
    let report_path = dir.path().join("analysis.json");

    medscope()
        .arg("-i")
        .arg(&path)
        .arg("--no-confirm")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let contents = std::fs::read_to_string(&report_path).expect("report file exists");
    let report: serde_json::Value = serde_json::from_str(&contents).expect("report is valid JSON");

    assert_eq!(report["metadata"]["rows"], 5);
    assert_eq!(report["metadata"]["columns"], 4);
    assert_eq!(report["metadata"]["target_column"], "Risk Level");
    assert!(report["missing_values"].is_array());
    assert!(report["top_correlations"].is_array());
}

#[test]
fn test_missing_target_column_skips_group_means() {
    let (_dir, path) = common::write_temp_csv("Age,BS\n25,7.1\n30,6.9\n");
    medscope()
        .arg("-i")
        .arg(&path)
        .arg("--no-confirm")
        .assert()
        .success()
        .stdout(predicate::str::contains("skipping group means"));
}
