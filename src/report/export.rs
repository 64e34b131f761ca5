//! JSON export of the session's analysis results

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use polars::prelude::*;
use serde::Serialize;

use crate::engine::RankedPair;

/// Metadata about the exported session
#[derive(Serialize)]
pub struct ReportMetadata {
    /// Timestamp of the export (ISO 8601 format)
    pub timestamp: String,
    /// Medscope version
    pub medscope_version: String,
    /// Input file path
    pub input_file: String,
    /// Risk/target column name
    pub target_column: String,
    /// Row count of the raw table
    pub rows: usize,
    /// Column count of the raw table
    pub columns: usize,
}

#[derive(Serialize)]
pub struct MissingEntry {
    pub column: String,
    pub missing: usize,
}

#[derive(Serialize)]
pub struct ImputedColumn {
    pub column: String,
    pub method: String,
}

/// One group's numeric means, keyed by the group label
#[derive(Serialize)]
pub struct GroupMeansEntry {
    pub group: String,
    pub means: Vec<(String, f64)>,
}

/// Complete analysis export
#[derive(Serialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub missing_values: Vec<MissingEntry>,
    pub imputed_columns: Vec<ImputedColumn>,
    pub top_correlations: Vec<RankedPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_means: Option<Vec<GroupMeansEntry>>,
}

/// Flatten a group-means table (group label column first, then one numeric
/// column per feature) into serializable entries.
pub fn group_means_entries(df: &DataFrame, group_column: &str) -> Result<Vec<GroupMeansEntry>> {
    let labels_col = df
        .column(group_column)
        .with_context(|| format!("group column '{}' missing from means table", group_column))?
        .cast(&DataType::String)?;
    let labels = labels_col.str()?;

    let numeric: Vec<(String, Column)> = df
        .get_columns()
        .iter()
        .filter(|col| col.name().as_str() != group_column)
        .map(|col| Ok((col.name().to_string(), col.cast(&DataType::Float64)?)))
        .collect::<Result<_>>()?;

    let mut entries = Vec::with_capacity(df.height());
    for (row, label) in labels.iter().enumerate() {
        let Some(label) = label else { continue };
        let mut means = Vec::with_capacity(numeric.len());
        for (name, col) in &numeric {
            if let Some(value) = col.f64()?.get(row) {
                means.push((name.clone(), value));
            }
        }
        entries.push(GroupMeansEntry {
            group: label.to_string(),
            means,
        });
    }
    Ok(entries)
}

impl ReportMetadata {
    pub fn now(input_file: &Path, target_column: &str, rows: usize, columns: usize) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            medscope_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input_file.display().to_string(),
            target_column: target_column.to_string(),
            rows,
            columns,
        }
    }
}

/// Write the report as pretty-printed JSON.
pub fn export_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;
    Ok(())
}
