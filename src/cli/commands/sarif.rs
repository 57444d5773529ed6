//! SARIF conversion command

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::Output;
use crate::config::{MdreportConfig, RenderSettings};
use crate::convert::sarif;
use crate::report::{loader, writer};

#[derive(Args)]
pub struct SarifArgs {
    /// SARIF report to convert
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output Markdown file
    #[arg(short, long, default_value = "sarif-report.md")]
    pub output: PathBuf,

    /// Render the full report with tool, rule, and finding details
    #[arg(long)]
    pub detailed: bool,
}

pub fn execute(args: SarifArgs, config: &MdreportConfig, output: &Output) -> Result<()> {
    let settings = RenderSettings::from_config(config);
    output.info(&format!("Reading SARIF report from {}", args.input.display()));

    let data = loader::load_json(&args.input)?;
    let markdown = if args.detailed {
        sarif::render_detailed(&data)
    } else {
        sarif::render_summary(&data)
    };

    let written = writer::write_report(&args.output, &markdown, settings.fallback_to_cwd)?;
    output.success(&format!("Markdown report saved to: {}", written.display()));
    Ok(())
}
