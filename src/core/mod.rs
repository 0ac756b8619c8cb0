//! Scan engine: segment source text into blocks, extract properties, match
//! blocks against rules, and merge the records of every file.

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod matcher;
pub mod pipeline;
pub mod properties;
pub mod segmenter;

pub use context::ScanContext;
pub use data::*;
