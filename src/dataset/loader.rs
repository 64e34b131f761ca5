//! CSV loading for the session dataset

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

/// Load the dataset from a CSV file.
///
/// `infer_schema_length` controls how many rows the reader inspects for
/// type detection; 0 means a full scan.
pub fn load_csv(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let infer = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(infer)
        .finish()
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let df = lf
        .collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;

    Ok(df)
}
