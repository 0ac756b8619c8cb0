//! Comment-aware segmentation of source text into blocks.
//!
//! The segmenter is a character-driven state machine that only knows about
//! `//` line comments and `/* */` block comments. Every comment opens a new
//! [`Block`]; the code that follows the comment is collected into the same
//! block until the next comment starts.
//!
//! # Line Comment Continuation
//!
//! Consecutive `//` lines merge into one block, blank lines included:
//!
//! ```text
//! // note: first line      <- block starts here
//! // purpose: second line  <- same block
//!
//! // author: still same    <- same block
//! void function(int x)     <- code fragment of that block
//! ```
//!
//! Any non-whitespace code between two `//` lines closes the first block, and
//! the next `//` line opens a new one.
//!
//! # Preamble
//!
//! A block is open from the first character, so text before the first comment
//! lands in a preamble block with an empty comment. It never carries
//! properties and is skipped by the matcher.

use std::collections::HashSet;

use crate::core::data::Block;

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Outside any comment.
    Text,
    /// Inside a `//` comment.
    LineCommentOpen,
    /// Just past the newline that ended a `//` line; the next `//` continues the block.
    LineCommentPendingContinue,
    /// Inside `/* ... */`.
    BlockCommentOpen,
}

/// Result of feeding one character to [`transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: ScanState,
    /// The open block must be finalized and a fresh one started.
    pub starts_block: bool,
}

/// Compute the next state for `current`, given its neighbours.
pub fn transition(
    state: ScanState,
    prev: Option<char>,
    current: char,
    next: Option<char>,
) -> Transition {
    let stay = Transition {
        state,
        starts_block: false,
    };

    match current {
        '/' => {
            if state == ScanState::BlockCommentOpen && prev == Some('*') {
                Transition {
                    state: ScanState::Text,
                    starts_block: false,
                }
            } else if state != ScanState::BlockCommentOpen && next == Some('*') {
                Transition {
                    state: ScanState::BlockCommentOpen,
                    starts_block: true,
                }
            } else if next == Some('/')
                && matches!(
                    state,
                    ScanState::Text | ScanState::LineCommentPendingContinue
                )
            {
                Transition {
                    state: ScanState::LineCommentOpen,
                    starts_block: state != ScanState::LineCommentPendingContinue,
                }
            } else {
                stay
            }
        }
        '\n' if state == ScanState::LineCommentOpen => Transition {
            state: ScanState::LineCommentPendingContinue,
            starts_block: false,
        },
        c if !c.is_whitespace() && state == ScanState::LineCommentPendingContinue => Transition {
            state: ScanState::Text,
            starts_block: false,
        },
        _ => stay,
    }
}

/// Splits source text into blocks.
pub struct Segmenter<'a> {
    allowed: &'a HashSet<String>,
    state: ScanState,
    line: usize,
    current: Block,
    blocks: Vec<Block>,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter that keeps only properties named in `allowed`
    /// (all properties when empty).
    pub fn new(allowed: &'a HashSet<String>) -> Self {
        Self {
            allowed,
            state: ScanState::Text,
            line: 1,
            current: Block::new(1),
            blocks: Vec::new(),
        }
    }

    /// Scan `source` and return its blocks in source order.
    pub fn segment(mut self, source: &str) -> Vec<Block> {
        // Line continuations are spliced away before scanning.
        let chars: Vec<char> = source.replace("\\\n", "").chars().collect();

        for (i, &c) in chars.iter().enumerate() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            self.feed(prev, c, next);
        }

        self.start_new_block();
        self.blocks
    }

    fn feed(&mut self, prev: Option<char>, c: char, next: Option<char>) {
        let prev_state = self.state;
        let step = transition(prev_state, prev, c, next);

        if step.starts_block {
            self.start_new_block();
        }
        self.state = step.state;

        if c == '\n' {
            self.line += 1;
        }

        if self.state == ScanState::Text && prev_state != ScanState::BlockCommentOpen {
            self.current.code_fragment.push(c);
        } else {
            self.current.comment.push(c);
        }
    }

    fn start_new_block(&mut self) {
        let mut finished = std::mem::replace(&mut self.current, Block::new(self.line));
        finished.finalize(self.allowed);
        self.blocks.push(finished);
    }
}

/// Convenience wrapper around [`Segmenter`].
pub fn segment(source: &str, allowed: &HashSet<String>) -> Vec<Block> {
    Segmenter::new(allowed).segment(source)
}
