//! Diagnostic types produced while matching blocks against rules.
//!
//! The core never prints. It returns issues as data and leaves presentation
//! to the reporter (CLI), so scans stay testable and can run in parallel.

use serde::Serialize;

use crate::core::Record;

// ============================================================
// Severity and Kind
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IssueKind {
    Record,
    UnmatchedBlock,
    FileError,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::Record => write!(f, "record"),
            IssueKind::UnmatchedBlock => write!(f, "unmatched-block"),
            IssueKind::FileError => write!(f, "file-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A block was accepted by a rule and produced a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordAcceptedIssue {
    pub file_path: String,
    pub line: usize,
    pub list_name: String,
    pub record: Record,
}

/// A block declared properties but no rule accepted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedBlockIssue {
    pub file_path: String,
    /// Line where the block's comment starts.
    pub line: usize,
    /// Start of the code fragment following the comment.
    pub preview: String,
}

/// A file could not be read or matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileErrorIssue {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Issue {
    RecordAccepted(RecordAcceptedIssue),
    UnmatchedBlock(UnmatchedBlockIssue),
    FileError(FileErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::RecordAccepted(_) => Severity::Info,
            Issue::UnmatchedBlock(_) => Severity::Warning,
            Issue::FileError(_) => Severity::Error,
        }
    }

    pub fn kind(&self) -> IssueKind {
        match self {
            Issue::RecordAccepted(_) => IssueKind::Record,
            Issue::UnmatchedBlock(_) => IssueKind::UnmatchedBlock,
            Issue::FileError(_) => IssueKind::FileError,
        }
    }

    pub fn file_path(&self) -> &str {
        match self {
            Issue::RecordAccepted(issue) => &issue.file_path,
            Issue::UnmatchedBlock(issue) => &issue.file_path,
            Issue::FileError(issue) => &issue.file_path,
        }
    }

    /// Source line, when the issue points into a file.
    pub fn line(&self) -> Option<usize> {
        match self {
            Issue::RecordAccepted(issue) => Some(issue.line),
            Issue::UnmatchedBlock(issue) => Some(issue.line),
            Issue::FileError(_) => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::RecordAccepted(issue) => format!("Got entry for list '{}'", issue.list_name),
            Issue::UnmatchedBlock(_) => "Comment block did not match any rule".to_string(),
            Issue::FileError(issue) => issue.error.clone(),
        }
    }

    /// Extra detail line shown under the location.
    pub fn details(&self) -> Option<String> {
        match self {
            Issue::RecordAccepted(issue) => Some(
                issue
                    .record
                    .iter()
                    .map(|(key, value)| format!("{}={:?}", key, value))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Issue::UnmatchedBlock(issue) => {
                Some(format!("code after comment: {:?}", issue.preview))
            }
            Issue::FileError(_) => None,
        }
    }

    pub fn is_info(&self) -> bool {
        self.severity() == Severity::Info
    }
}

/// Order issues by location: file, then line.
pub fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    a.file_path()
        .cmp(b.file_path())
        .then_with(|| a.line().cmp(&b.line()))
}
