//! Missing-value imputation
//!
//! Applies a per-column method assignment to the raw table, producing a
//! cleaned copy. Columns are processed in their left-to-right table order
//! against the accumulating result, so rows removed by `DropRows` are
//! absent from the processing of later columns. This makes the interaction
//! between drop and fill methods deterministic and reproducible.

use std::collections::HashMap;
use std::fmt;

use polars::prelude::*;
use serde::Serialize;

use crate::dataset::is_numeric_dtype;

use super::error::EngineError;

/// How missing values in a single column are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImputationMethod {
    Mean,
    Median,
    Mode,
    DropRows,
}

impl ImputationMethod {
    pub fn label(&self) -> &'static str {
        match self {
            ImputationMethod::Mean => "Mean",
            ImputationMethod::Median => "Median",
            ImputationMethod::Mode => "Mode",
            ImputationMethod::DropRows => "Drop rows",
        }
    }
}

impl fmt::Display for ImputationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Semantic role of a column, deciding which methods are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// The designated risk/target column, used later for grouping
    Target,
    /// Any other column with a primitive numeric dtype
    Numeric,
    /// Everything else
    Categorical,
}

impl ColumnRole {
    pub fn label(&self) -> &'static str {
        match self {
            ColumnRole::Target => "target",
            ColumnRole::Numeric => "numeric",
            ColumnRole::Categorical => "categorical",
        }
    }
}

/// Determine a column's role from the current table state.
///
/// Always derived from the data, never stored, so it stays correct after
/// mutations that change a column's dtype.
pub fn column_role(df: &DataFrame, column: &str, target: &str) -> Result<ColumnRole, EngineError> {
    if column == target {
        return Ok(ColumnRole::Target);
    }
    let col = df.column(column)?;
    if is_numeric_dtype(col.dtype()) {
        Ok(ColumnRole::Numeric)
    } else {
        Ok(ColumnRole::Categorical)
    }
}

/// The valid methods for a role, in the order they are offered. The first
/// entry doubles as the default choice.
pub fn valid_methods(role: ColumnRole) -> &'static [ImputationMethod] {
    match role {
        ColumnRole::Target => &[ImputationMethod::DropRows, ImputationMethod::Mode],
        ColumnRole::Numeric => &[ImputationMethod::Mean, ImputationMethod::Median],
        ColumnRole::Categorical => &[ImputationMethod::Mode],
    }
}

/// Per-column method selection, decoupled from any UI widget state.
///
/// Carries an entry only for columns with at least one missing value;
/// columns without an entry pass through imputation unchanged.
#[derive(Debug, Clone, Default)]
pub struct MethodAssignment {
    methods: HashMap<String, ImputationMethod>,
}

impl MethodAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default assignment: the first valid method for every column that
    /// currently has missing values.
    pub fn defaults(df: &DataFrame, target: &str) -> Result<Self, EngineError> {
        let mut assignment = Self::new();
        let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        for name in names {
            if df.column(&name)?.null_count() == 0 {
                continue;
            }
            let role = column_role(df, &name, target)?;
            assignment.assign(name, valid_methods(role)[0]);
        }
        Ok(assignment)
    }

    pub fn assign(&mut self, column: impl Into<String>, method: ImputationMethod) {
        self.methods.insert(column.into(), method);
    }

    pub fn get(&self, column: &str) -> Option<ImputationMethod> {
        self.methods.get(column).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Entries ordered by the column order of `df`.
    pub fn ordered(&self, df: &DataFrame) -> Vec<(String, ImputationMethod)> {
        df.get_column_names()
            .iter()
            .filter_map(|name| {
                self.get(name.as_str())
                    .map(|method| (name.to_string(), method))
            })
            .collect()
    }
}

/// Apply `assignment` to `df`, producing a cleaned copy. The input table is
/// never mutated.
///
/// Guarantees: every assigned column is free of missing values afterwards
/// (filled, or its missing rows removed); unassigned columns are identical
/// to the input; the row count only shrinks, and only through `DropRows`.
pub fn impute(
    df: &DataFrame,
    target: &str,
    assignment: &MethodAssignment,
) -> Result<DataFrame, EngineError> {
    let mut cleaned = df.clone();

    for (name, method) in assignment.ordered(df) {
        let role = column_role(&cleaned, &name, target)?;
        if !valid_methods(role).contains(&method) {
            return Err(EngineError::Configuration {
                method: method.label(),
                column: name,
                role: role.label(),
            });
        }

        match method {
            ImputationMethod::Mean => fill_numeric(&mut cleaned, &name, Aggregate::Mean)?,
            ImputationMethod::Median => fill_numeric(&mut cleaned, &name, Aggregate::Median)?,
            ImputationMethod::Mode => fill_mode(&mut cleaned, &name)?,
            ImputationMethod::DropRows => {
                let mask = cleaned
                    .column(&name)?
                    .as_materialized_series()
                    .is_not_null();
                cleaned = cleaned.filter(&mask)?;
            }
        }
    }

    Ok(cleaned)
}

#[derive(Clone, Copy)]
enum Aggregate {
    Mean,
    Median,
}

impl Aggregate {
    fn label(&self) -> &'static str {
        match self {
            Aggregate::Mean => "mean",
            Aggregate::Median => "median",
        }
    }
}

/// Fill nulls in a numeric column with its mean or median, computed once
/// over the non-missing values before filling. The filled column is widened
/// to Float64 since the fill value is generally fractional.
fn fill_numeric(df: &mut DataFrame, name: &str, agg: Aggregate) -> Result<(), EngineError> {
    if df.column(name)?.null_count() == 0 {
        return Ok(());
    }

    let cast = df.column(name)?.cast(&DataType::Float64)?;
    let ca = cast.f64()?;

    let mut values: Vec<f64> = ca.iter().flatten().collect();
    if values.is_empty() {
        return Err(EngineError::Computation {
            aggregate: agg.label(),
            column: name.to_string(),
        });
    }

    let fill = match agg {
        Aggregate::Mean => values.iter().sum::<f64>() / values.len() as f64,
        Aggregate::Median => {
            values.sort_by(f64::total_cmp);
            quantile_sorted(&values, 0.5)
        }
    };

    let filled: Float64Chunked = ca.iter().map(|v| Some(v.unwrap_or(fill))).collect();
    let mut series = filled.into_series();
    series.rename(name.into());
    df.with_column(series)?;
    Ok(())
}

/// Fill nulls with the most frequent non-missing value. Tie-break: the
/// smallest value in ascending sort order (lexicographic for strings,
/// numeric for numbers).
fn fill_mode(df: &mut DataFrame, name: &str) -> Result<(), EngineError> {
    if df.column(name)?.null_count() == 0 {
        return Ok(());
    }

    if is_numeric_dtype(df.column(name)?.dtype()) {
        let cast = df.column(name)?.cast(&DataType::Float64)?;
        let ca = cast.f64()?;

        let mut values: Vec<f64> = ca.iter().flatten().collect();
        if values.is_empty() {
            return Err(EngineError::Computation {
                aggregate: "mode",
                column: name.to_string(),
            });
        }
        values.sort_by(f64::total_cmp);

        // Longest run in the sorted values; the first run wins ties, which
        // is exactly the smallest-value tie-break.
        let mut fill = values[0];
        let mut best_len = 0usize;
        let mut run_start = 0usize;
        for i in 0..=values.len() {
            if i == values.len() || values[i] != values[run_start] {
                if i - run_start > best_len {
                    best_len = i - run_start;
                    fill = values[run_start];
                }
                run_start = i;
            }
        }

        let filled: Float64Chunked = ca.iter().map(|v| Some(v.unwrap_or(fill))).collect();
        let mut series = filled.into_series();
        series.rename(name.into());
        df.with_column(series)?;
    } else {
        let cast = df.column(name)?.cast(&DataType::String)?;
        let ca = cast.str()?;

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for value in ca.iter().flatten() {
            *counts.entry(value).or_insert(0) += 1;
        }
        let fill = counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(value, _)| (*value).to_string())
            .ok_or_else(|| EngineError::Computation {
                aggregate: "mode",
                column: name.to_string(),
            })?;

        let filled: StringChunked = ca
            .iter()
            .map(|v| Some(v.unwrap_or(fill.as_str())))
            .collect();
        let mut series = filled.into_series();
        series.rename(name.into());
        df.with_column(series)?;
    }

    Ok(())
}

/// Quantile with linear interpolation over an ascending-sorted slice.
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (pos - lo as f64) * (sorted[hi] - sorted[lo])
    }
}
