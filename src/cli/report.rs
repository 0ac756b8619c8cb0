//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Kept apart from the scan
//! engine so feather can be used as a library.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use colored::{ColoredString, Colorize};

use super::commands::{CheckSummary, CommandResult, CommandSummary, GenerateSummary, InitSummary};
use crate::issues::{Issue, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to a writer.
///
/// Informational `record` issues are only shown when `verbose` is set.
/// Issues are expected to be sorted already.
pub fn report_to<W: Write>(issues: &[Issue], verbose: bool, writer: &mut W) {
    let shown: Vec<&Issue> = issues
        .iter()
        .filter(|issue| verbose || !issue.is_info())
        .collect();

    if shown.is_empty() {
        return;
    }

    for issue in &shown {
        print_issue(issue, writer);
    }

    print_summary(issues, writer);
}

/// Print a success message when nothing needs attention.
pub fn print_success_to<W: Write>(source_files: usize, record_count: usize, writer: &mut W) {
    let msg = format!(
        "Scanned {} source {}, collected {} {} - no issues found",
        source_files,
        plural(source_files, "file", "files"),
        record_count,
        plural(record_count, "record", "records"),
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

// ============================================================
// Internal Functions
// ============================================================

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Info => "info".bold().cyan(),
        Severity::Warning => "warning".bold().yellow(),
        Severity::Error => "error".bold().red(),
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_label(issue.severity()),
        issue.message(),
        issue.kind().to_string().dimmed().cyan()
    );

    let location = match issue.line() {
        Some(line) => format!("{}:{}", issue.file_path(), line),
        None => issue.file_path().to_string(),
    };
    let _ = writeln!(writer, "  {} {}", "-->".blue(), location);

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            plural(total_errors, "error", "errors").red(),
            total_warnings,
            plural(total_warnings, "warning", "warnings").yellow()
        );
    }
}

fn has_problems(result: &CommandResult) -> bool {
    result.error_count > 0 || result.warning_count > 0
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(result, summary, verbose),
        CommandSummary::Check(summary) => print_check(result, summary, verbose),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_generate(result: &CommandResult, summary: &GenerateSummary, verbose: bool) {
    let mut out = io::stdout().lock();
    report_to(&result.issues, verbose, &mut out);
    print_generate_to(summary, &mut out);
}

fn print_generate_to<W: Write>(summary: &GenerateSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {} in {} {}",
        "Collected".green().bold(),
        summary.record_count,
        plural(summary.record_count, "record", "records"),
        summary.list_count,
        plural(summary.list_count, "list", "lists"),
    );
    let _ = writeln!(writer, "Templates written: {}", summary.written.len());
    for path in &summary.written {
        let _ = writeln!(writer, "  - {}", path.display());
    }
}

fn print_check(result: &CommandResult, summary: &CheckSummary, verbose: bool) {
    // stdout is reserved for the JSON document when one is requested.
    if let Some(json) = &summary.json {
        report_to(&result.issues, verbose, &mut io::stderr().lock());
        println!("{}", json);
        return;
    }

    let mut out = io::stdout().lock();
    report_to(&result.issues, verbose, &mut out);
    if !has_problems(result) {
        print_success_to(result.source_files_checked, summary.record_count, &mut out);
    }
}

fn print_init(summary: &InitSummary) {
    print_created_to(&summary.created, &mut io::stdout().lock());
}

fn print_created_to<W: Write>(created: &[PathBuf], writer: &mut W) {
    for path in created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", path.display()).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
