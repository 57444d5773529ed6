//! BlazeMeter conversion command

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::Output;
use crate::config::{MdreportConfig, RenderSettings};
use crate::convert::blazemeter;
use crate::report::{loader, writer};

#[derive(Args)]
pub struct BlazemeterArgs {
    /// BlazeMeter aggregate JSON report to convert
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output Markdown file
    #[arg(short, long, default_value = "blazemeter-report.md")]
    pub output: PathBuf,

    /// Artifact name shown in the report header
    #[arg(long)]
    pub artifact: String,

    /// BlazeMeter test id shown in the report header
    #[arg(long)]
    pub test_id: String,
}

pub fn execute(args: BlazemeterArgs, config: &MdreportConfig, output: &Output) -> Result<()> {
    let settings = RenderSettings::from_config(config);
    output.info(&format!(
        "Reading BlazeMeter aggregate report from {}",
        args.input.display()
    ));

    let data = loader::load_json(&args.input)?;
    let markdown = blazemeter::render(&data, &args.artifact, &args.test_id);

    let written = writer::write_report(&args.output, &markdown, settings.fallback_to_cwd)?;
    output.success(&format!("Markdown report saved to: {}", written.display()));
    Ok(())
}
