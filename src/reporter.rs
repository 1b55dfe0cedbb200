//! Report formatting and printing utilities.
//!
//! This module is separate from the core library logic so lincat can be
//! used as a library without printing side effects.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::issue::{Issue, Severity};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in a cargo-style format.
///
/// Issues are sorted and displayed with severity and message, a clickable
/// file location, a source excerpt where available, and a final summary of
/// error/warning counts.
pub fn print_report(issues: &[Issue]) {
    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = sorted
        .iter()
        .filter_map(|i| i.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for issue in &sorted {
        let severity_str = match issue.severity {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };

        println!(
            "{}: \"{}\"  {}",
            severity_str,
            issue.message,
            issue.rule.to_string().dimmed().cyan()
        );

        match (issue.line, issue.col) {
            (Some(line), Some(col)) => {
                println!("  {} {}:{}:{}", "-->".blue(), issue.file_path, line, col);
            }
            (Some(line), None) => {
                println!("  {} {}:{}", "-->".blue(), issue.file_path, line);
            }
            _ => println!("  {} {}", "-->".blue(), issue.file_path),
        }

        if let Some(source_line) = &issue.source_line {
            let line = issue.line.unwrap_or(0);
            println!("{:>width$} {}", "", "|".blue(), width = max_line_width);
            println!(
                "{:>width$} {} {}",
                line.to_string().blue(),
                "|".blue(),
                source_line,
                width = max_line_width
            );
            if let Some(col) = issue.col {
                let caret_char = match issue.severity {
                    Severity::Error => "^".red(),
                    Severity::Warning => "^".yellow(),
                };
                // Use unicode display width so the caret lines up under
                // CJK and other wide characters.
                let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
                let caret_padding = UnicodeWidthStr::width(prefix.as_str());
                println!(
                    "{:>width$} {} {:>padding$}{}",
                    "",
                    "|".blue(),
                    "",
                    caret_char,
                    width = max_line_width,
                    padding = caret_padding
                );
            }
        }

        if let Some(details) = &issue.details {
            println!(
                "{:>width$} {} {} {}",
                "",
                "=".blue(),
                "note:".bold(),
                details,
                width = max_line_width
            );
        }

        println!(); // Empty line between issues
    }

    let total_errors = sorted
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let total_warnings = sorted
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        println!(
            "\n{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

/// Print a success message when no issues are found.
///
/// Displays the number of catalog files checked to give the user confidence
/// that the check actually ran and covered the expected scope.
pub fn print_success(catalog_files: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} catalog {} - no issues found",
            catalog_files,
            if catalog_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}
