//! Core data types shared by the scanner, matcher and reporters.
//!
//! ## Module Structure
//!
//! - `block`: A scanned (comment, code line) unit
//! - `rule`: Extraction policy loaded from the rule file
//! - `record`: Accepted output entries and the buckets they land in

mod block;
mod record;
mod rule;

pub use block::*;
pub use record::*;
pub use rule::*;
