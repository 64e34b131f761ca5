//! Categorical encoding of the cleaned table
//!
//! Two strategies: label encoding replaces each categorical column in
//! place with integer codes; one-hot replaces it with one boolean
//! indicator column per distinct value. Either way the returned table has
//! no categorical columns left.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use polars::prelude::*;
use serde::Serialize;

use crate::dataset::is_numeric_dtype;

use super::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EncodingStrategy {
    Label,
    OneHot,
}

impl EncodingStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            EncodingStrategy::Label => "Label Encoding",
            EncodingStrategy::OneHot => "One-Hot Encoding",
        }
    }

    /// Parse the CLI spelling ("label" or "one-hot").
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "label" => Some(EncodingStrategy::Label),
            "one-hot" | "onehot" => Some(EncodingStrategy::OneHot),
            _ => None,
        }
    }
}

impl fmt::Display for EncodingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Encode the categorical columns of `df` with the chosen strategy. The
/// input table is never mutated.
pub fn encode(df: &DataFrame, strategy: EncodingStrategy) -> Result<DataFrame, EngineError> {
    match strategy {
        EncodingStrategy::Label => label_encode(df),
        EncodingStrategy::OneHot => one_hot_encode(df),
    }
}

/// Distinct non-null values of a categorical column, ascending. This is
/// the stable category ordering that label codes and indicator columns
/// are derived from.
fn distinct_sorted(ca: &StringChunked) -> Vec<String> {
    let set: BTreeSet<String> = ca.iter().flatten().map(str::to_string).collect();
    set.into_iter().collect()
}

/// Replace each categorical column with integer codes assigned by the
/// sorted order of its distinct values. Same name, same position, new
/// numeric dtype. Nulls stay null.
fn label_encode(df: &DataFrame) -> Result<DataFrame, EngineError> {
    let categorical: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|col| !is_numeric_dtype(col.dtype()))
        .map(|col| col.name().to_string())
        .collect();

    let mut encoded = df.clone();
    for name in categorical {
        let cast = df.column(&name)?.cast(&DataType::String)?;
        let ca = cast.str()?;

        let distinct = distinct_sorted(ca);
        let codes: HashMap<&str, u32> = distinct
            .iter()
            .enumerate()
            .map(|(code, value)| (value.as_str(), code as u32))
            .collect();

        let coded: UInt32Chunked = ca
            .iter()
            .map(|value| value.map(|v| codes[v]))
            .collect();
        let mut series = coded.into_series();
        series.rename(name.as_str().into());
        encoded.with_column(series)?;
    }

    Ok(encoded)
}

/// Replace each categorical column with one boolean column per distinct
/// value, named `{column}_{value}`. Non-categorical columns keep their
/// relative order; indicator columns are appended grouped by original
/// column. A row with a missing category is all-false across that
/// column's indicators.
fn one_hot_encode(df: &DataFrame) -> Result<DataFrame, EngineError> {
    let mut kept: Vec<Column> = Vec::new();
    let mut indicators: Vec<Column> = Vec::new();

    for col in df.get_columns() {
        if is_numeric_dtype(col.dtype()) {
            kept.push(col.clone());
            continue;
        }

        let cast = col.cast(&DataType::String)?;
        let ca = cast.str()?;

        for value in distinct_sorted(ca) {
            let mask: BooleanChunked = ca
                .iter()
                .map(|v| Some(v == Some(value.as_str())))
                .collect();
            let mut series = mask.into_series();
            series.rename(format!("{}_{}", col.name(), value).into());
            indicators.push(series.into_column());
        }
    }

    kept.extend(indicators);
    Ok(DataFrame::new(kept)?)
}
