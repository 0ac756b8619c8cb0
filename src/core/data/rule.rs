use std::sync::OnceLock;

use anyhow::{Result, anyhow};
use regex::Regex;

/// One extraction policy loaded from the rule file.
///
/// The code pattern is compiled on first use and cached, so a rule with a
/// broken pattern only fails once something actually tries to match with it.
/// `OnceLock` keeps the rule shareable across rayon workers.
#[derive(Debug, Clone, Default)]
pub struct Rule {
    /// Bucket that accepted records are appended to.
    pub list_name: String,
    pub required_properties: Vec<String>,
    pub optional_properties: Vec<String>,
    /// Path suffixes (without leading dot) this rule applies to.
    pub file_extensions: Vec<String>,
    /// Regular expression searched for in a block's code fragment.
    pub code_pattern: String,
    compiled: OnceLock<Result<Regex, regex::Error>>,
}

impl Rule {
    pub fn new(list_name: impl Into<String>, code_pattern: impl Into<String>) -> Self {
        Self {
            list_name: list_name.into(),
            code_pattern: code_pattern.into(),
            ..Default::default()
        }
    }

    pub fn required<I, S>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_properties
            .extend(props.into_iter().map(Into::into));
        self
    }

    pub fn optional<I, S>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_properties
            .extend(props.into_iter().map(Into::into));
        self
    }

    pub fn extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_extensions
            .extend(exts.into_iter().map(Into::into));
        self
    }

    /// A rule applies to a file when the path ends with any of its extensions.
    pub fn applies_to(&self, path: &str) -> bool {
        self.file_extensions
            .iter()
            .any(|ext| path.ends_with(ext.as_str()))
    }

    /// Whether `key` is one of the properties this rule carries into a record.
    pub fn accepts_property(&self, key: &str) -> bool {
        self.required_properties.iter().any(|p| p == key)
            || self.optional_properties.iter().any(|p| p == key)
    }

    /// All property names the rule mentions, required first.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.required_properties
            .iter()
            .chain(self.optional_properties.iter())
            .map(String::as_str)
    }

    /// Compiled code pattern, or `None` when the rule has no pattern.
    pub fn code_regex(&self) -> Result<Option<&Regex>> {
        if self.code_pattern.is_empty() {
            return Ok(None);
        }

        self.compiled
            .get_or_init(|| Regex::new(&self.code_pattern))
            .as_ref()
            .map(Some)
            .map_err(|e| {
                anyhow!(
                    "Invalid code pattern for list '{}': \"{}\"\n{}",
                    self.list_name,
                    self.code_pattern,
                    e
                )
            })
    }
}
