use anyhow::Result;

use super::{CommandResult, CommandSummary, GenerateSummary, helper::finish};
use crate::{
    cli::args::GenerateArgs,
    core::{ScanContext, record_count},
    render::render_templates,
};

/// Scan sources, then render every template with the collected records.
pub fn generate(args: GenerateArgs) -> Result<CommandResult> {
    let ctx = ScanContext::new(&args.common)?;
    let output = ctx.output();

    let written = render_templates(
        &ctx.config.templates,
        &output.buckets,
        &ctx.template_dir,
        &args.output_path,
    )?;

    let summary = GenerateSummary {
        record_count: record_count(&output.buckets),
        list_count: output.buckets.len(),
        written,
    };

    Ok(finish(
        CommandSummary::Generate(summary),
        output.issues.clone(),
        output.files_processed,
        false,
    ))
}
