//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Scan sources, collect records and render templates into Markdown
//! - `check`: Scan sources and report comment blocks that match no rule
//! - `init`: Write a starter `.feather` rule file and template

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(args)) => args.common.verbose,
            Some(Command::Check(args)) => args.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Arguments shared by commands that scan sources.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory holding the `.feather` rule file and `*.jinja2` templates
    #[arg(long, alias = "template_path", env = "FEATHER_TEMPLATE_PATH")]
    pub template_path: PathBuf,

    /// Root of the source tree to scan
    #[arg(long, default_value = ".")]
    pub source_root: PathBuf,

    /// Skip paths matching this prefix or glob pattern (repeatable)
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory the rendered Markdown files are written to
    #[arg(long, alias = "output_path")]
    pub output_path: PathBuf,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the collected records as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to create the rule file and template in
    #[arg(long, alias = "template_path", default_value = ".")]
    pub template_path: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect documented code and render the templates into Markdown
    Generate(GenerateArgs),
    /// Report comment blocks that declare properties but match no rule
    Check(CheckArgs),
    /// Create a starter .feather rule file and template
    Init(InitArgs),
}
