//! Feather - Markdown documentation from annotated source comments
//!
//! Feather scans source files for comments that declare `key: value`
//! properties, pairs each comment with the code right after it, and collects
//! the blocks accepted by user-defined rules into named lists. The lists are
//! then rendered through Jinja templates into Markdown.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: `.feather` rule file parsing and template discovery
//! - `core`: Scan engine (segmenter, property extraction, rule matching, pipeline)
//! - `issues`: Diagnostic type definitions
//! - `render`: Template rendering into Markdown
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod render;
pub mod utils;
