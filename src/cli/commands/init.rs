use std::fs;

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, InitSummary, helper::finish};
use crate::{
    cli::args::InitArgs,
    config::{CONFIG_FILE_NAME, DEFAULT_TEMPLATE_NAME, default_config_text, default_template_text},
};

/// Write a starter rule file, plus a template unless one already exists.
pub fn init(args: InitArgs) -> Result<CommandResult> {
    let dir = &args.template_path;
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    fs::write(&config_path, default_config_text())
        .with_context(|| format!("Failed to write file: {}", config_path.display()))?;
    let mut created = vec![config_path];

    let template_path = dir.join(DEFAULT_TEMPLATE_NAME);
    if !template_path.exists() {
        fs::write(&template_path, default_template_text())
            .with_context(|| format!("Failed to write file: {}", template_path.display()))?;
        created.push(template_path);
    }

    Ok(finish(
        CommandSummary::Init(InitSummary { created }),
        Vec::new(),
        0,
        false,
    ))
}
