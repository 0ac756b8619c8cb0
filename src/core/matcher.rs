//! Rule matching: turns blocks into records.
//!
//! For every block that declared properties, each applicable rule is tried in
//! order:
//!
//! 1. The rule's code pattern is searched for in the block's code fragment.
//!    No match means the rule does not apply.
//! 2. A candidate record is seeded with the block's properties that the rule
//!    knows (required or optional), then every named capture group is laid on
//!    top. Captures win on collisions.
//! 3. The candidate is accepted only when every required property is present.
//!    Incomplete candidates are dropped without a diagnostic.
//!
//! Several rules may accept the same block. A block that no rule accepts is
//! reported as an [`UnmatchedBlockIssue`].

use anyhow::Result;

use crate::{
    core::data::{Block, Record, Rule},
    issues::{FileErrorIssue, Issue, RecordAcceptedIssue, UnmatchedBlockIssue},
    utils::{PREVIEW_WIDTH, truncate_to_width},
};

/// Records and diagnostics produced for one file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Accepted records with the list they belong to, in discovery order.
    pub records: Vec<(String, Record)>,
    pub issues: Vec<Issue>,
}

/// Match `blocks` from `file_path` against `rules`.
///
/// Callers pass only the rules that apply to the file. A rule whose code
/// pattern is not a valid regular expression is reported once as a
/// [`FileErrorIssue`] and then treated as not applying; the other rules keep
/// matching.
pub fn match_blocks(file_path: &str, blocks: &[Block], rules: &[&Rule]) -> MatchOutcome {
    let mut records = Vec::new();
    let mut issues = Vec::new();
    let mut broken = vec![false; rules.len()];

    for block in blocks.iter().filter(|b| b.has_properties()) {
        let mut matched_something = false;

        for (idx, rule) in rules.iter().enumerate() {
            if broken[idx] {
                continue;
            }

            let record = match build_record(block, rule) {
                Ok(Some(record)) => record,
                Ok(None) => continue,
                Err(e) => {
                    broken[idx] = true;
                    issues.push(Issue::FileError(FileErrorIssue {
                        file_path: file_path.to_string(),
                        error: format!("{:#}", e),
                    }));
                    continue;
                }
            };

            issues.push(Issue::RecordAccepted(RecordAcceptedIssue {
                file_path: file_path.to_string(),
                line: block.start_line,
                list_name: rule.list_name.clone(),
                record: record.clone(),
            }));
            records.push((rule.list_name.clone(), record));
            matched_something = true;
        }

        if !matched_something {
            issues.push(Issue::UnmatchedBlock(UnmatchedBlockIssue {
                file_path: file_path.to_string(),
                line: block.start_line,
                preview: truncate_to_width(&block.code_fragment, PREVIEW_WIDTH),
            }));
        }
    }

    MatchOutcome { records, issues }
}

/// Try one rule against one block. `Ok(None)` when the rule does not accept it.
fn build_record(block: &Block, rule: &Rule) -> Result<Option<Record>> {
    let Some(regex) = rule.code_regex()? else {
        return Ok(None);
    };
    let Some(captures) = regex.captures(&block.code_fragment) else {
        return Ok(None);
    };

    let mut record: Record = block
        .properties
        .iter()
        .filter(|(key, _)| rule.accepts_property(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    for name in regex.capture_names().flatten() {
        if let Some(m) = captures.name(name) {
            record.insert(name.to_string(), m.as_str().to_string());
        }
    }

    let complete = rule
        .required_properties
        .iter()
        .all(|prop| record.contains_key(prop));

    Ok(complete.then_some(record))
}
