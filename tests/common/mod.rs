//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small maternal-health style table with known missing-value patterns:
/// - `Age`: numeric, one missing
/// - `Systolic BP`: numeric, one missing
/// - `BS`: numeric, complete
/// - `Risk Level`: categorical target, one missing
pub fn create_maternal_dataframe() -> DataFrame {
    df! {
        "Age" => [Some(25i64), None, Some(40), Some(35), Some(30)],
        "Systolic BP" => [Some(120.0f64), Some(140.0), None, Some(130.0), Some(110.0)],
        "BS" => [7.1f64, 6.9, 8.2, 7.5, 7.0],
        "Risk Level" => [Some("Low"), Some("High"), Some("Low"), None, Some("Mid")],
    }
    .unwrap()
}

/// A fully clean table for identity-style assertions.
pub fn create_clean_dataframe() -> DataFrame {
    df! {
        "Age" => [25i64, 32, 40],
        "BS" => [10.0f64, 20.0, 30.0],
        "Risk Level" => ["Low", "Low", "High"],
    }
    .unwrap()
}

/// Write a CSV fixture into a temp directory; the caller keeps the
/// TempDir alive for the duration of the test.
pub fn write_temp_csv(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("dataset.csv");
    let mut file = std::fs::File::create(&path).expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    (dir, path)
}

/// The standard CSV fixture used by loader and CLI tests.
pub fn maternal_csv() -> &'static str {
    "Age,Systolic BP,BS,Risk Level\n\
     25,120,7.1,Low\n\
     ,140,6.9,High\n\
     40,,8.2,Low\n\
     35,130,7.5,\n\
     30,110,7.0,Mid\n"
}
