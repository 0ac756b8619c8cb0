use std::collections::{BTreeMap, HashSet};

use crate::core::properties::extract_properties;

/// Properties declared in a comment, keyed by property name.
pub type Properties = BTreeMap<String, String>;

/// One scanned unit: a comment span paired with the code line that follows it.
///
/// Blocks are built incrementally by the segmenter and become read-only once
/// [`Block::finalize`] has run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// 1-based line where the block's comment started.
    pub start_line: usize,
    /// Raw comment text including delimiters, trimmed at finalization.
    pub comment: String,
    /// `key: value` pairs found in the comment. Empty until finalized.
    pub properties: Properties,
    /// First line of code after the comment, trimmed.
    pub code_fragment: String,
}

impl Block {
    pub fn new(start_line: usize) -> Self {
        Self {
            start_line,
            ..Default::default()
        }
    }

    /// Extract properties, trim the comment and cut the code down to its first line.
    pub fn finalize(&mut self, allowed: &HashSet<String>) {
        self.properties = extract_properties(&self.comment, allowed);
        self.comment = self.comment.trim().to_string();
        self.code_fragment = first_line(&self.code_fragment);
    }

    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }
}

fn first_line(code: &str) -> String {
    code.trim()
        .lines()
        .next()
        .map(|line| line.trim_end().to_string())
        .unwrap_or_default()
}
