use std::{cell::OnceCell, collections::BTreeSet, path::PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        file_scanner::scan_files,
        pipeline::{PipelineOutput, run_pipeline},
    },
};

/// Data shared by the `generate` and `check` commands.
///
/// The rule file is loaded and the source tree scanned when the context is
/// created. Matching runs on first access to [`ScanContext::output`], so a
/// configuration error aborts the run before any file is read.
pub struct ScanContext {
    /// Rules and templates loaded from the template directory.
    pub config: Config,
    pub template_dir: PathBuf,
    pub source_root: PathBuf,
    /// Files selected for scanning, relative to `source_root`.
    pub files: BTreeSet<String>,
    pub verbose: bool,

    output: OnceCell<PipelineOutput>,
}

impl ScanContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let verbose = args.verbose;
        let config = load_config(&args.template_path)?;

        if verbose {
            eprintln!(
                "Loaded {} rule(s) and {} template(s) from {}",
                config.rules.len(),
                config.templates.len(),
                args.template_path.display()
            );
        }

        let scan_result = scan_files(&args.source_root, &config.rules, &args.ignore, verbose);

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            template_dir: args.template_path.clone(),
            source_root: args.source_root.clone(),
            files: scan_result.files,
            verbose,
            output: OnceCell::new(),
        })
    }

    /// Segment and match every selected file (lazy, computed once).
    pub fn output(&self) -> &PipelineOutput {
        self.output.get_or_init(|| {
            if self.verbose {
                eprintln!("Scanning {} file(s)", self.files.len());
            }
            run_pipeline(&self.source_root, &self.files, &self.config.rules)
        })
    }
}
