//! Dive conversion command

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::Output;
use crate::config::{MdreportConfig, RenderSettings};
use crate::convert::dive;
use crate::report::{loader, writer};

#[derive(Args)]
pub struct DiveArgs {
    /// Dive JSON report to convert
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output Markdown file
    #[arg(short, long, default_value = "dive-analysis.md")]
    pub output: PathBuf,
}

pub fn execute(args: DiveArgs, config: &MdreportConfig, output: &Output) -> Result<()> {
    let settings = RenderSettings::from_config(config);
    output.info(&format!("Reading Dive report from {}", args.input.display()));

    let data = loader::load_json(&args.input)?;
    let markdown = dive::render(&data);

    let written = writer::write_report(&args.output, &markdown, settings.fallback_to_cwd)?;
    output.success(&format!("Markdown report saved to: {}", written.display()));
    Ok(())
}
