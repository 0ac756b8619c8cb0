use std::path::PathBuf;

use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub record_count: usize,
    pub list_count: usize,
    /// Markdown files written, in template order.
    pub written: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub record_count: usize,
    /// Collected records as pretty JSON, when requested.
    pub json: Option<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: Vec<PathBuf>,
}

/// Result of running feather commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, warnings alone make the command fail (lint mode).
    /// Errors always do.
    pub exit_on_warnings: bool,
    /// All issues found, including informational record notes.
    pub issues: Vec<Issue>,
    /// Number of source files that were scanned.
    pub source_files_checked: usize,
}
