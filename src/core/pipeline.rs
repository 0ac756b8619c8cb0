//! Per-file processing and the parallel merge across files.
//!
//! Each file is read, segmented and matched independently, so files are
//! processed in parallel with rayon. Workers return their own
//! [`MatchOutcome`]; a single sequential pass then appends records to the
//! buckets in sorted file order, which keeps output deterministic.

use std::{
    collections::{BTreeSet, HashSet},
    fs,
    path::Path,
};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::{
    core::{
        data::{Buckets, Rule},
        matcher::{MatchOutcome, match_blocks},
        segmenter::segment,
    },
    issues::{FileErrorIssue, Issue},
};

/// Merged result of processing every file.
#[derive(Debug, Default)]
pub struct PipelineOutput {
    pub buckets: Buckets,
    pub issues: Vec<Issue>,
    pub files_processed: usize,
}

/// Segment and match a single file's contents.
///
/// Only rules whose extensions match `file_path` take part, and property
/// extraction is restricted to the names those rules mention.
pub fn process_source(file_path: &str, source: &str, rules: &[Rule]) -> MatchOutcome {
    let applicable: Vec<&Rule> = rules.iter().filter(|r| r.applies_to(file_path)).collect();
    if applicable.is_empty() {
        return MatchOutcome::default();
    }

    let allowed: HashSet<String> = applicable
        .iter()
        .flat_map(|rule| rule.property_names())
        .map(str::to_string)
        .collect();

    let blocks = segment(source, &allowed);
    match_blocks(file_path, &blocks, &applicable)
}

fn process_file(base_dir: &Path, file_path: &str, rules: &[Rule]) -> Result<MatchOutcome> {
    let full_path = base_dir.join(file_path);
    let source = fs::read_to_string(&full_path)
        .with_context(|| format!("Failed to read file: {}", full_path.display()))?;
    Ok(process_source(file_path, &source, rules))
}

/// Process `files` (relative to `base_dir`) in parallel and merge the results.
pub fn run_pipeline(base_dir: &Path, files: &BTreeSet<String>, rules: &[Rule]) -> PipelineOutput {
    let ordered: Vec<&String> = files.iter().collect();
    let results: Vec<_> = ordered
        .into_par_iter()
        .map(|file_path| (file_path, process_file(base_dir, file_path, rules)))
        .collect();

    let mut output = PipelineOutput::default();

    for (file_path, result) in results {
        output.files_processed += 1;
        match result {
            Ok(outcome) => {
                for (list_name, record) in outcome.records {
                    output.buckets.entry(list_name).or_default().push(record);
                }
                output.issues.extend(outcome.issues);
            }
            Err(e) => {
                output.issues.push(Issue::FileError(FileErrorIssue {
                    file_path: file_path.clone(),
                    error: format!("{:#}", e),
                }));
            }
        }
    }

    output
}
