//! Unit tests for the encoding engine

use medscope::dataset::{classify_column, ColumnKind};
use medscope::engine::{encode, EncodingStrategy};
use polars::prelude::*;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_label_encoding_sorted_codes() {
    let df = df! {
        "Age" => [25i64, 32, 40, 29],
        "Risk Level" => ["Low", "Mid", "High", "Low"],
    }
    .unwrap();

    let encoded = encode(&df, EncodingStrategy::Label).unwrap();

    // Shape preserved, column order preserved
    assert_eq!(encoded.shape(), df.shape());
    assert_eq!(encoded.get_column_names(), df.get_column_names());

    // Codes follow the sorted category order: High=0, Low=1, Mid=2
    let risk = encoded.column("Risk Level").unwrap();
    assert_eq!(risk.dtype(), &DataType::UInt32);
    let codes: Vec<u32> = risk.u32().unwrap().into_iter().flatten().collect();
    assert_eq!(codes, vec![1, 2, 0, 1]);
}

#[test]
fn test_label_encoding_leaves_no_categorical_columns() {
    let df = common::create_clean_dataframe();
    let encoded = encode(&df, EncodingStrategy::Label).unwrap();

    for name in encoded.get_column_names() {
        assert_eq!(
            classify_column(&encoded, name.as_str()).unwrap(),
            ColumnKind::Numeric,
            "column '{}' should be numeric after label encoding",
            name
        );
    }
}

#[test]
fn test_label_encoding_does_not_touch_numeric_columns() {
    let df = common::create_clean_dataframe();
    let encoded = encode(&df, EncodingStrategy::Label).unwrap();

    for name in ["Age", "BS"] {
        assert!(
            encoded
                .column(name)
                .unwrap()
                .as_materialized_series()
                .equals(df.column(name).unwrap().as_materialized_series()),
            "numeric column '{}' must be untouched",
            name
        );
    }
}

#[test]
fn test_one_hot_encoding_columns_and_order() {
    let df = df! {
        "Age" => [25i64, 32, 40],
        "Risk Level" => ["Low", "Mid", "High"],
        "Smoker" => ["Yes", "No", "No"],
    }
    .unwrap();

    let encoded = encode(&df, EncodingStrategy::OneHot).unwrap();

    // Numeric columns keep their position, indicator columns follow,
    // grouped by source column with values in ascending order
    let names: Vec<String> = encoded
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "Age",
            "Risk Level_High",
            "Risk Level_Low",
            "Risk Level_Mid",
            "Smoker_No",
            "Smoker_Yes",
        ]
    );
    assert_eq!(encoded.height(), df.height());
}

#[test]
fn test_one_hot_indicator_values() {
    let df = df! {
        "Risk Level" => ["Low", "Mid", "Low"],
    }
    .unwrap();

    let encoded = encode(&df, EncodingStrategy::OneHot).unwrap();

    let low_col = encoded.column("Risk Level_Low").unwrap();
    let low: Vec<bool> = low_col.bool().unwrap().into_iter().flatten().collect();
    assert_eq!(low, vec![true, false, true]);

    let mid_col = encoded.column("Risk Level_Mid").unwrap();
    let mid: Vec<bool> = mid_col.bool().unwrap().into_iter().flatten().collect();
    assert_eq!(mid, vec![false, true, false]);
}

#[test]
fn test_one_hot_leaves_no_categorical_columns() {
    let df = common::create_clean_dataframe();
    let encoded = encode(&df, EncodingStrategy::OneHot).unwrap();

    for name in encoded.get_column_names() {
        assert_eq!(
            classify_column(&encoded, name.as_str()).unwrap(),
            ColumnKind::Numeric,
            "column '{}' should be numeric-or-boolean after one-hot",
            name
        );
    }
}

#[test]
fn test_one_hot_missing_category_row_is_all_false() {
    let df = df! {
        "Risk Level" => [Some("Low"), None, Some("Mid")],
    }
    .unwrap();

    let encoded = encode(&df, EncodingStrategy::OneHot).unwrap();
    for name in ["Risk Level_Low", "Risk Level_Mid"] {
        let col = encoded.column(name).unwrap();
        assert_eq!(col.bool().unwrap().get(1), Some(false));
    }
}

#[test]
fn test_encode_does_not_mutate_input() {
    let df = common::create_clean_dataframe();
    let before = df.clone();
    let _ = encode(&df, EncodingStrategy::OneHot).unwrap();
    let _ = encode(&df, EncodingStrategy::Label).unwrap();
    assert!(df.equals(&before));
}

#[test]
fn test_encoding_strategy_parsing() {
    assert_eq!(EncodingStrategy::parse("label"), Some(EncodingStrategy::Label));
    assert_eq!(EncodingStrategy::parse("one-hot"), Some(EncodingStrategy::OneHot));
    assert_eq!(EncodingStrategy::parse("OneHot"), Some(EncodingStrategy::OneHot));
    assert_eq!(EncodingStrategy::parse("ordinal"), None);
}

#[test]
fn test_all_numeric_table_is_identity_under_both_strategies() {
    let df = df! {
        "Age" => [25i64, 32],
        "BS" => [7.1f64, 6.9],
    }
    .unwrap();

    assert!(encode(&df, EncodingStrategy::Label).unwrap().equals(&df));
    assert!(encode(&df, EncodingStrategy::OneHot).unwrap().equals(&df));
}
