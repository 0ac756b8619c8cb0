//! `key: value` extraction from comment text.
//!
//! Each line of a comment may declare one property. Leading whitespace and
//! comment markers (`/`, `*`) are skipped, the key runs up to the first colon,
//! and the colon must be followed by whitespace:
//!
//! ```text
//! /*
//!  * note: This is a note.
//!  * purpose: Nothing
//!  */
//! ```

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::core::data::Properties;

static PROPERTY_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s/*]*([^:]*):\s+(.*)$").unwrap());

/// Extract properties from a comment.
///
/// When `allowed` is non-empty only keys contained in it are kept. A key
/// declared twice keeps its last value.
pub fn extract_properties(comment: &str, allowed: &HashSet<String>) -> Properties {
    let mut properties = Properties::new();

    for line in comment.lines() {
        let Some(captures) = PROPERTY_LINE_REGEX.captures(line) else {
            continue;
        };

        let key = captures.get(1).map_or("", |m| m.as_str());
        if key.is_empty() {
            continue;
        }
        if !allowed.is_empty() && !allowed.contains(key) {
            continue;
        }

        let value = captures.get(2).map_or("", |m| m.as_str()).trim();
        properties.insert(key.to_string(), value.to_string());
    }

    properties
}
