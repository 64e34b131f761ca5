//! Terminal styling utilities for the dashboard output

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✧ ", "* ");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
    ███╗   ███╗███████╗██████╗ ███████╗ ██████╗ ██████╗ ██████╗ ███████╗
    ████╗ ████║██╔════╝██╔══██╗██╔════╝██╔════╝██╔═══██╗██╔══██╗██╔════╝
    ██╔████╔██║█████╗  ██║  ██║███████╗██║     ██║   ██║██████╔╝█████╗
    ██║╚██╔╝██║██╔══╝  ██║  ██║╚════██║██║     ██║   ██║██╔═══╝ ██╔══╝
    ██║ ╚═╝ ██║███████╗██████╔╝███████║╚██████╗╚██████╔╝██║     ███████╗
    ╚═╝     ╚═╝╚══════╝╚═════╝ ╚══════╝ ╚═════╝ ╚═════╝ ╚═╝     ╚══════╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}",
        style("Medical dataset exploration from the terminal").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the session configuration
pub fn print_config(input: &Path, target: &str, encoding: &str) {
    println!(
        "    {} Input:    {}",
        FOLDER,
        style(input.display()).yellow()
    );
    println!("    {} Target:   {}", TARGET, style(target).yellow());
    println!("    {} Encoding: {}", CHART, style(encoding).yellow());
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a section header without a step number (interactive mode)
pub fn print_section(title: &str) {
    println!();
    println!("    {} {}", SPARKLE, style(title).white().bold());
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!(
        "    {} {}",
        style("✓").green().bold(),
        style(message).green()
    );
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a recoverable error; the session keeps running
pub fn print_error(message: &str) {
    println!("    {} {}", style("✗").red().bold(), style(message).red());
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        CHART,
        style("Medscope session complete").green().bold()
    );
    println!();
}
