//! Table rendering for the dashboard output

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use polars::prelude::*;

use crate::dataset::{ColumnKind, DatasetStore};
use crate::engine::{CategoricalSummary, CorrelationAnalysis, NumericSummary, RankedPair};

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        headers
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

fn fmt_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e12 {
        format!("{:.1}", value)
    } else {
        format!("{:.4}", value)
    }
}

fn fmt_cell(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => "null".to_string(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float64(v) => fmt_float(*v),
        AnyValue::Float32(v) => fmt_float(f64::from(*v)),
        other => other.to_string(),
    }
}

/// Dataset overview: per-column dtype classification and missing counts.
pub fn render_overview(store: &DatasetStore) {
    let mut table = new_table(vec!["Column", "Type", "Missing"]);
    for (name, missing) in store.missing_overview() {
        let kind = store
            .classify(&name)
            .map(|k| k.label())
            .unwrap_or("unknown");
        table.add_row(vec![
            Cell::new(&name),
            Cell::new(kind).fg(if kind == ColumnKind::Numeric.label() {
                Color::Cyan
            } else {
                Color::Magenta
            }),
            Cell::new(missing).fg(if missing > 0 { Color::Red } else { Color::White }),
        ]);
    }
    print_indented(&table);
}

/// Generic frame renderer; `limit` caps the number of rows shown.
pub fn render_frame(df: &DataFrame, limit: Option<usize>) {
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut table = new_table(headers.iter().map(String::as_str).collect());

    let rows = limit.unwrap_or(df.height()).min(df.height());
    for row in 0..rows {
        let cells: Vec<Cell> = df
            .get_columns()
            .iter()
            .map(|col| {
                let value = col
                    .get(row)
                    .map(|v| fmt_cell(&v))
                    .unwrap_or_else(|_| String::new());
                Cell::new(value)
            })
            .collect();
        table.add_row(cells);
    }
    print_indented(&table);

    if rows < df.height() {
        println!(
            "    {}",
            style(format!("... {} of {} rows shown", rows, df.height())).dim()
        );
    }
}

/// Statistical summary of a numeric column.
pub fn render_numeric_summary(column: &str, summary: &NumericSummary) {
    let mut table = new_table(vec!["Statistic", column]);
    table.add_row(vec![Cell::new("count"), Cell::new(summary.count)]);
    for (label, value) in [
        ("mean", summary.mean),
        ("std", summary.std),
        ("min", summary.min),
        ("25%", summary.q25),
        ("50%", summary.median),
        ("75%", summary.q75),
        ("max", summary.max),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(fmt_float(value))]);
    }
    print_indented(&table);
}

/// Value counts of a categorical column, descending.
pub fn render_value_counts(column: &str, summary: &CategoricalSummary) {
    let mut table = new_table(vec![column, "Count"]);
    for (value, count) in &summary.counts {
        table.add_row(vec![Cell::new(value), Cell::new(count)]);
    }
    print_indented(&table);
}

/// Full correlation matrix over the numeric columns.
pub fn render_correlation_matrix(analysis: &CorrelationAnalysis) {
    let n = analysis.columns.len();
    if n < 2 {
        println!(
            "    {}",
            style("Fewer than 2 numeric columns; nothing to correlate").dim()
        );
        return;
    }

    let mut headers = vec![""];
    headers.extend(analysis.columns.iter().map(String::as_str));
    let mut table = new_table(headers);

    for i in 0..n {
        let mut cells = vec![Cell::new(&analysis.columns[i]).add_attribute(Attribute::Bold)];
        for j in 0..n {
            cells.push(Cell::new(fmt_float(analysis.matrix[(i, j)])));
        }
        table.add_row(cells);
    }
    print_indented(&table);
}

/// Top ranked correlation pairs. Both orientations of each unordered pair
/// appear, matching the unstacked matrix the ranking is derived from.
pub fn render_ranked_pairs(ranked: &[RankedPair]) {
    if ranked.is_empty() {
        println!("    {}", style("No correlation pairs to rank").dim());
        return;
    }
    let mut table = new_table(vec!["Feature A", "Feature B", "Coefficient"]);
    for pair in ranked {
        table.add_row(vec![
            Cell::new(&pair.feature1),
            Cell::new(&pair.feature2),
            Cell::new(fmt_float(pair.coefficient)).fg(if pair.coefficient >= 0.0 {
                Color::Green
            } else {
                Color::Red
            }),
        ]);
    }
    print_indented(&table);
}

/// Missing counts after cleaning, flagged red where any remain.
pub fn render_missing_counts(counts: &[(String, usize)]) {
    let mut table = new_table(vec!["Column", "Missing"]);
    for (name, missing) in counts {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(missing).fg(if *missing > 0 { Color::Red } else { Color::Green }),
        ]);
    }
    print_indented(&table);
}
