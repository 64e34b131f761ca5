//! Dataset store: an immutable session handle over the loaded table
//!
//! The raw table is loaded once at startup and never modified; every
//! downstream computation receives either this handle or a cleaned copy
//! derived from it.

pub mod descriptions;
mod loader;

pub use descriptions::describe_field;

use std::path::{Path, PathBuf};

use anyhow::Result;
use polars::prelude::*;

/// Derived Numeric/Categorical classification of a column. Recomputed from
/// the data on every call, never cached, so it stays correct after
/// mutations such as encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnKind {
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
        }
    }
}

/// Numeric-or-boolean dtype check. Booleans count as numeric so that the
/// indicator columns produced by one-hot encoding do not re-classify as
/// categorical.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    dtype.is_primitive_numeric() || matches!(dtype, DataType::Boolean)
}

/// Classify a column by its dtype: numeric (or boolean) means `Numeric`,
/// anything else `Categorical`.
pub fn classify_column(df: &DataFrame, column: &str) -> PolarsResult<ColumnKind> {
    let col = df.column(column)?;
    if is_numeric_dtype(col.dtype()) {
        Ok(ColumnKind::Numeric)
    } else {
        Ok(ColumnKind::Categorical)
    }
}

/// Missing-value count of a single column.
pub fn missing_count(df: &DataFrame, column: &str) -> PolarsResult<usize> {
    Ok(df.column(column)?.null_count())
}

/// Per-column missing counts in table order.
pub fn missing_overview(df: &DataFrame) -> Vec<(String, usize)> {
    df.get_columns()
        .iter()
        .map(|col| (col.name().to_string(), col.null_count()))
        .collect()
}

/// The raw dataset for the session.
#[derive(Debug)]
pub struct DatasetStore {
    path: PathBuf,
    table: DataFrame,
}

impl DatasetStore {
    /// Load the dataset from a CSV file.
    pub fn load(path: &Path, infer_schema_length: usize) -> Result<Self> {
        let table = loader::load_csv(path, infer_schema_length)?;
        Ok(Self {
            path: path.to_path_buf(),
            table,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &DataFrame {
        &self.table
    }

    pub fn shape(&self) -> (usize, usize) {
        self.table.shape()
    }

    pub fn estimated_size_mb(&self) -> f64 {
        self.table.estimated_size() as f64 / (1024.0 * 1024.0)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.table
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn classify(&self, column: &str) -> PolarsResult<ColumnKind> {
        classify_column(&self.table, column)
    }

    pub fn missing_count(&self, column: &str) -> PolarsResult<usize> {
        missing_count(&self.table, column)
    }

    /// Per-column missing counts in table order.
    pub fn missing_overview(&self) -> Vec<(String, usize)> {
        missing_overview(&self.table)
    }
}
