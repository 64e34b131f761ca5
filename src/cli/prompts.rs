//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::{Confirm, Select};

use crate::engine::{EncodingStrategy, ImputationMethod};

/// Main dashboard action menu; returns the chosen index.
pub fn select_action(actions: &[&str]) -> Result<usize> {
    let choice = Select::new()
        .with_prompt("Choose an action")
        .items(actions)
        .default(0)
        .interact()?;
    Ok(choice)
}

/// Pick a column from the dataset.
pub fn select_column(columns: &[String]) -> Result<String> {
    let choice = Select::new()
        .with_prompt("Choose a column to analyze")
        .items(columns)
        .default(0)
        .interact()?;
    Ok(columns[choice].clone())
}

/// Pick a missing-value method for one column from its valid set.
pub fn choose_method(column: &str, options: &[ImputationMethod]) -> Result<ImputationMethod> {
    let labels: Vec<&str> = options.iter().map(|m| m.label()).collect();
    let choice = Select::new()
        .with_prompt(format!("Choose method for column '{}'", column))
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options[choice])
}

/// Pick the encoding strategy for the cleaned table.
pub fn choose_encoding(default: EncodingStrategy) -> Result<EncodingStrategy> {
    let options = [EncodingStrategy::Label, EncodingStrategy::OneHot];
    let labels: Vec<&str> = options.iter().map(|s| s.label()).collect();
    let default_idx = options.iter().position(|s| *s == default).unwrap_or(0);
    let choice = Select::new()
        .with_prompt("Choose encoding method")
        .items(&labels)
        .default(default_idx)
        .interact()?;
    Ok(options[choice])
}

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}
