//! Template rendering into Markdown.
//!
//! Templates use Jinja syntax (via minijinja). Each list name is a top-level
//! variable holding that list's records, so a template iterates them with
//! `{% for entry in entries %}`. Lists nobody produced render as empty.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use minijinja::{Environment, path_loader};

use crate::core::Buckets;

/// Extension given to rendered files.
pub const OUTPUT_EXTENSION: &str = "md";

/// Path a template renders to: `<output_dir>/<template stem>.md`.
pub fn output_path_for(template: &Path, output_dir: &Path) -> PathBuf {
    let stem = template
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}.{}", stem, OUTPUT_EXTENSION))
}

/// Render every template with `buckets` as context and write the results.
///
/// Templates are loaded through `template_dir`, so they can include or extend
/// each other. Returns the paths written, in template order.
pub fn render_templates(
    templates: &[PathBuf],
    buckets: &Buckets,
    template_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let mut env = Environment::new();
    env.set_loader(path_loader(template_dir));

    let mut written = Vec::with_capacity(templates.len());

    for template_path in templates {
        let name = template_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let template = env
            .get_template(&name)
            .with_context(|| format!("Failed to load template: {}", template_path.display()))?;
        let rendered = template
            .render(buckets)
            .with_context(|| format!("Failed to render template: {}", template_path.display()))?;

        let output_path = output_path_for(template_path, output_dir);
        fs::write(&output_path, rendered)
            .with_context(|| format!("Failed to write file: {}", output_path.display()))?;
        written.push(output_path);
    }

    Ok(written)
}
