//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::engine::EncodingStrategy;

/// Medscope - explore, clean and encode a medical risk dataset
#[derive(Parser, Debug)]
#[command(name = "medscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file path
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Risk/target column used for group means and method gating
    #[arg(short, long, default_value = "Risk Level")]
    pub target: String,

    /// Column to summarize during a non-interactive run
    #[arg(short, long)]
    pub column: Option<String>,

    /// Encoding strategy applied to categorical columns.
    /// Options: "label" (integer codes) or "one-hot" (indicator columns)
    #[arg(long, default_value = "label", value_parser = parse_encoding)]
    pub encoding: EncodingStrategy,

    /// Write a JSON analysis report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Number of rows shown in table previews
    #[arg(long, default_value = "5")]
    pub head: usize,

    /// Skip the interactive dashboard and run the full pipeline once
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Number of rows to use for schema inference.
    /// Use 0 for a full table scan (slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

impl Cli {
    /// Get the input path; the dashboard cannot start without one.
    pub fn input(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }

    /// Report path: the explicit `--report` value, or a path next to the
    /// input with an '_analysis.json' suffix (e.g. data.csv -> data_analysis.json).
    pub fn report_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.report {
            return Some(path.clone());
        }
        let input = self.input.as_ref()?;
        let parent = input.parent().unwrap_or_else(|| std::path::Path::new("."));
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("dataset");
        Some(parent.join(format!("{}_analysis.json", stem)))
    }
}

/// Validator/parser for the --encoding argument
fn parse_encoding(s: &str) -> Result<EncodingStrategy, String> {
    EncodingStrategy::parse(s)
        .ok_or_else(|| format!("'{}' is not a valid encoding. Options: label, one-hot", s))
}
