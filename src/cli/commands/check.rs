use anyhow::{Context, Result};

use super::{CheckSummary, CommandResult, CommandSummary, helper::finish};
use crate::{
    cli::args::CheckArgs,
    core::{ScanContext, record_count},
};

/// Scan sources and report blocks that match no rule, without rendering.
pub fn check(args: CheckArgs) -> Result<CommandResult> {
    let ctx = ScanContext::new(&args.common)?;
    let output = ctx.output();

    let json = if args.json {
        Some(
            serde_json::to_string_pretty(&output.buckets)
                .context("Failed to serialize records.")?,
        )
    } else {
        None
    };

    let summary = CheckSummary {
        record_count: record_count(&output.buckets),
        json,
    };

    Ok(finish(
        CommandSummary::Check(summary),
        output.issues.clone(),
        output.files_processed,
        true,
    ))
}
