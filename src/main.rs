//! Medscope: interactive EDA dashboard for a maternal health risk dataset
//!
//! One session = one CSV. The raw table stays immutable; imputation,
//! analysis and encoding each derive a fresh table from the current
//! selections and render the result.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;
use polars::prelude::DataFrame;

use medscope::cli::{self, Cli};
use medscope::dataset::{describe_field, missing_overview, DatasetStore};
use medscope::engine::{
    column_role, correlation_matrix, describe_column, encode, group_means, impute, valid_methods,
    ColumnSummary, MethodAssignment,
};
use medscope::report::{
    export_report, group_means_entries, render_correlation_matrix, render_frame,
    render_missing_counts, render_numeric_summary, render_overview, render_ranked_pairs,
    render_value_counts, AnalysisReport, ImputedColumn, MissingEntry, ReportMetadata,
};
use medscope::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_error, print_info, print_section, print_step_header, print_success, SPARKLE,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = cli
        .input()
        .ok_or_else(|| {
            anyhow::anyhow!("Input file is required. Use -i/--input to specify a CSV file.")
        })?
        .clone();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&input, &cli.target, cli.encoding.label());

    // Load the dataset once; everything downstream reads this handle
    let load_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let store = DatasetStore::load(&input, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols) = store.shape();
    println!("\n    {} Dataset Statistics:", style(SPARKLE).cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", store.estimated_size_mb());
    println!(
        "      Loaded in {:.2}s",
        load_start.elapsed().as_secs_f64()
    );

    print_section("Dataset Overview");
    render_overview(&store);
    print_section("Dataset Preview");
    render_frame(store.table(), Some(cli.head));

    if cli.no_confirm {
        run_pipeline(&cli, &input, &store)
    } else {
        run_dashboard(&cli, &input, &store)
    }
}

/// The table every analysis runs against: the cleaned copy once imputation
/// has been run, otherwise the raw table.
fn current<'a>(cleaned: &'a Option<DataFrame>, store: &'a DatasetStore) -> &'a DataFrame {
    cleaned.as_ref().unwrap_or_else(|| store.table())
}

/// Non-interactive mode: run every step once with default selections.
fn run_pipeline(cli: &Cli, input: &Path, store: &DatasetStore) -> Result<()> {
    let assignment = MethodAssignment::defaults(store.table(), &cli.target)?;
    let mut cleaned: Option<DataFrame> = None;

    // Step 1: Missing value handling
    print_step_header(1, "Missing Value Handling");
    if assignment.is_empty() {
        print_info("No columns contain missing values");
    } else {
        for (name, method) in assignment.ordered(store.table()) {
            println!(
                "      {} {} {}",
                style(&name).yellow(),
                style("→").dim(),
                method
            );
        }
        match impute(store.table(), &cli.target, &assignment) {
            Ok(df) => {
                print_success("Missing value handling complete");
                println!("\n      Missing values after cleaning:");
                render_missing_counts(&missing_overview(&df));
                render_frame(&df, Some(cli.head));
                cleaned = Some(df);
            }
            Err(err) => print_error(&err.to_string()),
        }
    }

    // Step 2: Column summary
    if let Some(column) = &cli.column {
        print_step_header(2, &format!("Analysis of {}", column));
        print_info(describe_field(column));
        match describe_column(current(&cleaned, store), column) {
            Ok(ColumnSummary::Numeric(summary)) => render_numeric_summary(column, &summary),
            Ok(ColumnSummary::Categorical(summary)) => render_value_counts(column, &summary),
            Err(err) => print_error(&err.to_string()),
        }
    }

    // Step 3: Correlations and group means
    print_step_header(3, "EDA & Relationships");
    match correlation_matrix(current(&cleaned, store)) {
        Ok(analysis) => {
            render_correlation_matrix(&analysis);
            println!("\n      Top feature correlations:");
            render_ranked_pairs(&analysis.ranked);
        }
        Err(err) => print_error(&err.to_string()),
    }
    match group_means(current(&cleaned, store), &cli.target) {
        Ok(Some(means)) => {
            println!(
                "\n      Average numeric features by {}:",
                style(&cli.target).yellow()
            );
            render_frame(&means, None);
        }
        Ok(None) => print_info(&format!(
            "Target column '{}' not present; skipping group means",
            cli.target
        )),
        Err(err) => print_error(&err.to_string()),
    }

    // Step 4: Encoding
    print_step_header(4, "Encoding Categorical Features");
    match encode(current(&cleaned, store), cli.encoding) {
        Ok(encoded) => {
            print_success(&format!("Applied {}", cli.encoding));
            render_frame(&encoded, Some(cli.head));
        }
        Err(err) => print_error(&err.to_string()),
    }

    // Optional JSON report
    if cli.report.is_some() {
        if let Some(path) = cli.report_path() {
            let report = build_report(cli, input, store, &assignment, &cleaned)?;
            export_report(&report, &path)?;
            print_success(&format!("Report written to {}", path.display()));
        }
    }

    print_completion();
    Ok(())
}

/// Interactive mode: one action per loop iteration, rendered immediately.
fn run_dashboard(cli: &Cli, input: &Path, store: &DatasetStore) -> Result<()> {
    let mut assignment = MethodAssignment::defaults(store.table(), &cli.target)?;
    let mut cleaned: Option<DataFrame> = None;
    let columns = store.column_names();

    loop {
        println!();
        let group_action = format!("Group means by '{}'", cli.target);
        let actions = [
            "Describe a column",
            "Configure missing-value handling",
            "Run missing-value handling",
            "Correlation analysis",
            group_action.as_str(),
            "Encode categorical columns",
            "Export analysis report",
            "Quit",
        ];

        match cli::select_action(&actions)? {
            // Describe a column
            0 => {
                let column = cli::select_column(&columns)?;
                print_section(&format!("Analysis of {}", column));
                print_info(describe_field(&column));
                match describe_column(current(&cleaned, store), &column) {
                    Ok(ColumnSummary::Numeric(summary)) => {
                        render_numeric_summary(&column, &summary)
                    }
                    Ok(ColumnSummary::Categorical(summary)) => {
                        render_value_counts(&column, &summary)
                    }
                    Err(err) => print_error(&err.to_string()),
                }
            }
            // Configure missing-value handling
            1 => {
                let mut offered = 0;
                for column in &columns {
                    if store.missing_count(column)? == 0 {
                        continue;
                    }
                    offered += 1;
                    let role = column_role(store.table(), column, &cli.target)?;
                    let method = cli::choose_method(column, valid_methods(role))?;
                    assignment.assign(column.clone(), method);
                }
                if offered == 0 {
                    print_info("No columns contain missing values");
                } else {
                    print_success(&format!("Methods chosen for {} column(s)", offered));
                }
            }
            // Run missing-value handling
            2 => {
                if assignment.is_empty() {
                    print_info("No columns contain missing values");
                    continue;
                }
                if !cli::confirm_step(&format!(
                    "Apply the chosen method(s) to {} column(s)?",
                    assignment.len()
                ))? {
                    continue;
                }
                match impute(store.table(), &cli.target, &assignment) {
                    Ok(df) => {
                        print_section("Dataset After Handling Missing Values");
                        println!("      Missing values after cleaning:");
                        render_missing_counts(&missing_overview(&df));
                        render_frame(&df, Some(cli.head));
                        cleaned = Some(df);
                        print_success("Missing value handling complete");
                    }
                    Err(err) => print_error(&err.to_string()),
                }
            }
            // Correlation analysis
            3 => match correlation_matrix(current(&cleaned, store)) {
                Ok(analysis) => {
                    print_section("Correlation Matrix (Numeric Features)");
                    render_correlation_matrix(&analysis);
                    println!("\n      Top feature correlations:");
                    render_ranked_pairs(&analysis.ranked);
                }
                Err(err) => print_error(&err.to_string()),
            },
            // Group means by target
            4 => match group_means(current(&cleaned, store), &cli.target) {
                Ok(Some(means)) => {
                    print_section(&format!("Average Numeric Features by {}", cli.target));
                    render_frame(&means, None);
                }
                Ok(None) => print_info(&format!(
                    "Target column '{}' not present; skipping group means",
                    cli.target
                )),
                Err(err) => print_error(&err.to_string()),
            },
            // Encode categorical columns
            5 => {
                let strategy = cli::choose_encoding(cli.encoding)?;
                match encode(current(&cleaned, store), strategy) {
                    Ok(encoded) => {
                        print_section("Dataset After Encoding");
                        print_success(&format!("Applied {}", strategy));
                        render_frame(&encoded, Some(cli.head));
                    }
                    Err(err) => print_error(&err.to_string()),
                }
            }
            // Export analysis report
            6 => {
                if let Some(path) = cli.report_path() {
                    let report = build_report(cli, input, store, &assignment, &cleaned)?;
                    export_report(&report, &path)?;
                    print_success(&format!("Report written to {}", path.display()));
                }
            }
            // Quit
            _ => break,
        }
    }

    print_completion();
    Ok(())
}

/// Assemble the JSON analysis report from the session's current state.
fn build_report(
    cli: &Cli,
    input: &Path,
    store: &DatasetStore,
    assignment: &MethodAssignment,
    cleaned: &Option<DataFrame>,
) -> Result<AnalysisReport> {
    let (rows, cols) = store.shape();
    let table = current(cleaned, store);

    let missing_values = store
        .missing_overview()
        .into_iter()
        .map(|(column, missing)| MissingEntry { column, missing })
        .collect();

    // Imputation methods only count once they have actually been applied
    let imputed_columns = if cleaned.is_some() {
        assignment
            .ordered(store.table())
            .into_iter()
            .map(|(column, method)| ImputedColumn {
                column,
                method: method.label().to_string(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let top_correlations = match correlation_matrix(table) {
        Ok(analysis) => analysis.ranked,
        Err(_) => Vec::new(),
    };

    let group_means_section = match group_means(table, &cli.target) {
        Ok(Some(means)) => Some(group_means_entries(&means, &cli.target)?),
        _ => None,
    };

    Ok(AnalysisReport {
        metadata: ReportMetadata::now(input, &cli.target, rows, cols),
        missing_values,
        imputed_columns,
        top_correlations,
        group_means: group_means_section,
    })
}
