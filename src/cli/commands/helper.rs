use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity, compare_issues};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
    exit_on_warnings: bool,
) -> CommandResult {
    // Stable sort keeps discovery order for issues at the same location.
    issues.sort_by(compare_issues);

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_warnings,
        issues,
        source_files_checked,
    }
}
