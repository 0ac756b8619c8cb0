//! Rule file loading and template discovery.
//!
//! Rules live in a `.feather` file inside the template directory:
//!
//! ```text
//! $ENTRY
//! list=entries
//! props=note,purpose
//! optional_props=since
//! ext=hpp,cpp
//! format=.*\s+(?P<name>[^(]*)\(.*\)
//! $END
//! ```
//!
//! Lines outside `$ENTRY`/`$END` are ignored, as are lines inside an entry
//! that hold no `key=value` pair.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Ok, Result, bail};
use regex::Regex;

use crate::core::Rule;

pub const CONFIG_FILE_NAME: &str = ".feather";

pub const TEMPLATE_EXTENSION: &str = "jinja2";

const ENTRY_START: &str = "$ENTRY";
const ENTRY_END: &str = "$END";

static DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+)=(.*)").unwrap());

const DEFAULT_CONFIG: &str = r"# Each entry turns annotated comments into records of one list.
#
#   list            name of the list the records are collected into
#   props           properties a comment must declare (comma separated)
#   optional_props  properties copied into the record when present
#   ext             file suffixes the entry applies to
#   format          regular expression searched for in the line after the comment;
#                   named groups become record fields
$ENTRY
list=functions
props=note
optional_props=purpose
ext=cpp,hpp,c,h
format=.*\s+(?P<name>[^(\s]*)\(.*\)
$END
";

const DEFAULT_TEMPLATE: &str = r"# Functions
{% for entry in functions %}
## `{{ entry.name }}`

{{ entry.note }}
{% if entry.purpose %}
Purpose: {{ entry.purpose }}
{% endif %}
{% endfor %}
";

/// Name of the template written by `feather init`.
pub const DEFAULT_TEMPLATE_NAME: &str = "docs.jinja2";

/// Rules and templates found in a template directory.
#[derive(Debug)]
pub struct Config {
    pub rules: Vec<Rule>,
    /// Template files, sorted by path.
    pub templates: Vec<PathBuf>,
}

/// Parse the contents of a rule file.
pub fn parse_rules(content: &str) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    let mut current: Option<(usize, Rule)> = None;

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.trim_end();

        if current.is_none() {
            if line == ENTRY_START {
                current = Some((line_num, Rule::default()));
            }
            continue;
        }

        if line == ENTRY_END {
            if let Some((start, rule)) = current.take() {
                if rule.list_name.is_empty() {
                    bail!("Entry starting on line {} has no 'list' directive", start);
                }
                rules.push(rule);
            }
            continue;
        }

        let (Some(captures), Some((_, rule))) =
            (DIRECTIVE_REGEX.captures(line), current.as_mut())
        else {
            continue;
        };
        let key = captures.get(1).map_or("", |m| m.as_str());
        let value = captures.get(2).map_or("", |m| m.as_str());

        match key {
            "list" => rule.list_name = value.to_string(),
            "format" => rule.code_pattern = value.to_string(),
            "props" => rule.required_properties = split_list(value),
            "optional_props" => rule.optional_properties = split_list(value),
            "ext" => rule.file_extensions = split_list(value),
            _ => bail!("Unrecognized key '{}' on line {}", key, line_num),
        }
    }

    if let Some((start, _)) = current {
        bail!("Entry starting on line {} is missing '{}'", start, ENTRY_END);
    }

    Ok(rules)
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Find `*.jinja2` templates directly inside `dir`.
pub fn find_templates(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read template directory: {}", dir.display()))?;

    let mut templates = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some(TEMPLATE_EXTENSION)
        {
            templates.push(path);
        }
    }
    templates.sort();

    Ok(templates)
}

pub fn load_config(template_dir: &Path) -> Result<Config> {
    let path = template_dir.join(CONFIG_FILE_NAME);
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read rule file: {}", path.display()))?;
    let rules =
        parse_rules(&content).with_context(|| format!("Failed to parse rule file: {:?}", path))?;

    Ok(Config {
        rules,
        templates: find_templates(template_dir)?,
    })
}

/// Starter rule file written by `feather init`.
pub fn default_config_text() -> &'static str {
    DEFAULT_CONFIG
}

/// Starter template written by `feather init`.
pub fn default_template_text() -> &'static str {
    DEFAULT_TEMPLATE
}
