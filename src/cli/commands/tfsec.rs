//! tfsec conversion command

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::Output;
use crate::config::{MdreportConfig, RenderSettings};
use crate::convert::tfsec;
use crate::report::{loader, writer};

#[derive(Args)]
pub struct TfsecArgs {
    /// tfsec JSON report to convert
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output Markdown file
    #[arg(short, long, default_value = "tfsec.md")]
    pub output: PathBuf,
}

pub fn execute(args: TfsecArgs, config: &MdreportConfig, output: &Output) -> Result<()> {
    let settings = RenderSettings::from_config(config);
    output.info(&format!("Reading tfsec report from {}", args.input.display()));

    let data = loader::load_json(&args.input)?;
    let markdown = tfsec::render(&data);

    let written = writer::write_report(&args.output, &markdown, settings.fallback_to_cwd)?;
    output.success(&format!("Markdown report saved to: {}", written.display()));
    Ok(())
}
