//! Shared formatting helpers for operator-facing output

use colored::Colorize;

/// Print a section header
pub fn header(title: &str) {
    println!("\n{}", title.bold());
    println!("{}", "=".repeat(title.len()).dimmed());
}

/// Print a success line
pub fn success(msg: &str) {
    println!("{} {msg}", "✓".green());
}

/// Print a warning line
pub fn warning(msg: &str) {
    println!("{} {msg}", "!".yellow());
}
