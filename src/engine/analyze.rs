//! Descriptive statistics, correlations and group-wise aggregates
//!
//! Three independent, pure read operations over a table: a single-column
//! summary, a full Pearson correlation matrix with ranked pairs, and
//! group-wise numeric means keyed by the risk/target column.

use std::collections::{BTreeMap, HashMap};

use faer::Mat;
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use crate::dataset::is_numeric_dtype;

use super::error::EngineError;
use super::impute::quantile_sorted;

/// How many ranked correlation pairs are reported.
pub const RANKED_PAIR_LIMIT: usize = 5;

/// Descriptive statistics of a numeric column over its non-missing values.
/// An empty column yields count 0 and NaN statistics rather than an error.
#[derive(Debug, Clone, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Distinct value -> occurrence count, descending by count, ties broken by
/// first-seen order in the data.
#[derive(Debug, Clone, Serialize)]
pub struct CategoricalSummary {
    pub counts: Vec<(String, usize)>,
}

#[derive(Debug, Clone, Serialize)]
pub enum ColumnSummary {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

/// Summarize a single column of the current table state.
pub fn describe_column(df: &DataFrame, name: &str) -> Result<ColumnSummary, EngineError> {
    let col = df.column(name)?;

    if is_numeric_dtype(col.dtype()) {
        let cast = col.cast(&DataType::Float64)?;
        let mut values: Vec<f64> = cast.f64()?.iter().flatten().collect();
        values.sort_by(f64::total_cmp);
        Ok(ColumnSummary::Numeric(numeric_summary(&values)))
    } else {
        let cast = col.cast(&DataType::String)?;
        let ca = cast.str()?;

        let mut first_seen: Vec<String> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();
        for value in ca.iter().flatten() {
            if !counts.contains_key(value) {
                first_seen.push(value.to_string());
            }
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }

        // Stable sort keeps first-seen order among equal counts
        let mut pairs: Vec<(String, usize)> = first_seen
            .into_iter()
            .map(|value| {
                let count = counts[&value];
                (value, count)
            })
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(ColumnSummary::Categorical(CategoricalSummary {
            counts: pairs,
        }))
    }
}

fn numeric_summary(sorted: &[f64]) -> NumericSummary {
    let n = sorted.len();
    if n == 0 {
        return NumericSummary {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mean = sorted.iter().sum::<f64>() / n as f64;
    // Sample standard deviation (ddof = 1)
    let std = if n > 1 {
        let sq_dev: f64 = sorted.iter().map(|x| (x - mean) * (x - mean)).sum();
        (sq_dev / (n - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    NumericSummary {
        count: n,
        mean,
        std,
        min: sorted[0],
        q25: quantile_sorted(sorted, 0.25),
        median: quantile_sorted(sorted, 0.5),
        q75: quantile_sorted(sorted, 0.75),
        max: sorted[n - 1],
    }
}

/// One ordered entry of the ranked correlation listing.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPair {
    pub feature1: String,
    pub feature2: String,
    pub coefficient: f64,
}

/// Full symmetric Pearson correlation matrix over the numeric columns,
/// plus the top ranked off-diagonal pairs.
#[derive(Debug, Clone)]
pub struct CorrelationAnalysis {
    pub columns: Vec<String>,
    pub matrix: Mat<f64>,
    pub ranked: Vec<RankedPair>,
}

/// Compute the correlation matrix and ranked pairs.
///
/// Pairwise-complete semantics: for each column pair, rows where either
/// value is missing are excluded. Constant or all-null columns produce NaN
/// entries. Fewer than two numeric columns yields a degenerate matrix and
/// an empty ranking, not an error.
///
/// The ranking deliberately keeps both orientations of each unordered pair
/// ((A,B) and (B,A) with the same coefficient), sorted descending by the
/// signed coefficient. Self-pairs are excluded by index.
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationAnalysis, EngineError> {
    let float_columns: Vec<(String, Column)> = df
        .get_columns()
        .iter()
        .filter(|col| is_numeric_dtype(col.dtype()))
        .map(|col| {
            col.cast(&DataType::Float64)
                .map(|cast| (col.name().to_string(), cast))
        })
        .collect::<PolarsResult<_>>()?;

    let n = float_columns.len();
    let columns: Vec<String> = float_columns.iter().map(|(name, _)| name.clone()).collect();

    let mut matrix = Mat::<f64>::zeros(n, n);
    for i in 0..n {
        matrix[(i, i)] = 1.0;
    }

    if n >= 2 {
        // Upper-triangle index pairs, computed in parallel
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect();

        let pb = ProgressBar::new(pairs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("   Calculating correlations [{bar:40.cyan/blue}] {pos}/{len} pairs")
                .unwrap()
                .progress_chars("=>-"),
        );

        let coefficients: Vec<((usize, usize), Option<f64>)> = pairs
            .par_iter()
            .map(|&(i, j)| {
                let corr = pairwise_pearson(&float_columns[i].1, &float_columns[j].1);
                pb.inc(1);
                ((i, j), corr)
            })
            .collect();
        pb.finish_and_clear();

        for ((i, j), corr) in coefficients {
            let value = corr.unwrap_or(f64::NAN);
            matrix[(i, j)] = value;
            matrix[(j, i)] = value;
        }
    }

    let mut ranked: Vec<RankedPair> = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let value = matrix[(i, j)];
            if value.is_nan() {
                continue;
            }
            ranked.push(RankedPair {
                feature1: columns[i].clone(),
                feature2: columns[j].clone(),
                coefficient: value,
            });
        }
    }
    ranked.sort_by(|a, b| {
        b.coefficient
            .partial_cmp(&a.coefficient)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(RANKED_PAIR_LIMIT);

    Ok(CorrelationAnalysis {
        columns,
        matrix,
        ranked,
    })
}

/// Single-pass Welford accumulation of the Pearson coefficient over rows
/// where both values are present.
fn pairwise_pearson(s1: &Column, s2: &Column) -> Option<f64> {
    let ca1 = s1.f64().ok()?;
    let ca2 = s2.f64().ok()?;
    if ca1.len() != ca2.len() {
        return None;
    }

    let mut n = 0.0_f64;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in ca1.iter().zip(ca2.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            n += 1.0;
            let dx = x - mean_x;
            let dy = y - mean_y;
            mean_x += dx / n;
            mean_y += dy / n;
            var_x += dx * (x - mean_x);
            var_y += dy * (y - mean_y);
            cov_xy += dx * (y - mean_y);
        }
    }

    if n < 2.0 {
        return None;
    }

    let std_x = (var_x / n).sqrt();
    let std_y = (var_y / n).sqrt();
    if std_x == 0.0 || std_y == 0.0 {
        return None;
    }

    Some(cov_xy / (n * std_x * std_y))
}

/// Mean of every numeric column per distinct value of `group_column`.
///
/// Returns `Ok(None)` when the group column is absent, so the caller can
/// skip the computation rather than treat it as an error. Missing values
/// within a group are excluded from that group's mean, and rows with a
/// missing group label are skipped entirely. Output rows are ordered
/// ascending by group label.
pub fn group_means(df: &DataFrame, group_column: &str) -> Result<Option<DataFrame>, EngineError> {
    let exists = df
        .get_column_names()
        .iter()
        .any(|name| name.as_str() == group_column);
    if !exists {
        return Ok(None);
    }

    let labels_col = df.column(group_column)?.cast(&DataType::String)?;
    let labels = labels_col.str()?;

    let numeric: Vec<(String, Column)> = df
        .get_columns()
        .iter()
        .filter(|col| is_numeric_dtype(col.dtype()) && col.name().as_str() != group_column)
        .map(|col| {
            col.cast(&DataType::Float64)
                .map(|cast| (col.name().to_string(), cast))
        })
        .collect::<PolarsResult<_>>()?;

    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (row, label) in labels.iter().enumerate() {
        if let Some(label) = label {
            groups.entry(label.to_string()).or_default().push(row);
        }
    }

    let mut group_labels: Vec<String> = Vec::with_capacity(groups.len());
    let mut mean_columns: Vec<Vec<f64>> = vec![Vec::with_capacity(groups.len()); numeric.len()];

    for (label, rows) in &groups {
        group_labels.push(label.clone());
        for (k, (_, col)) in numeric.iter().enumerate() {
            let ca = col.f64()?;
            let mut sum = 0.0;
            let mut count = 0usize;
            for &row in rows {
                if let Some(value) = ca.get(row) {
                    sum += value;
                    count += 1;
                }
            }
            mean_columns[k].push(if count > 0 {
                sum / count as f64
            } else {
                f64::NAN
            });
        }
    }

    let mut out: Vec<Column> = Vec::with_capacity(numeric.len() + 1);
    out.push(Column::new(group_column.into(), group_labels));
    for ((name, _), values) in numeric.iter().zip(mean_columns) {
        out.push(Column::new(name.as_str().into(), values));
    }

    Ok(Some(DataFrame::new(out)?))
}
