//! TruffleHog conversion commands
//!
//! Both subcommands consume the scanner's JSONL stream; `report` renders
//! Markdown finding sections while `aggregate` bundles the raw records
//! into one JSON document for downstream tooling.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::Output;
use crate::config::{MdreportConfig, RenderSettings};
use crate::convert::trufflehog;
use crate::report::{loader, writer};

#[derive(Subcommand)]
pub enum TrufflehogCommands {
    /// Render findings as a Markdown report
    Report(ReportArgs),
    /// Bundle JSONL records into a single JSON document
    Aggregate(AggregateArgs),
}

#[derive(Args)]
pub struct ReportArgs {
    /// TruffleHog JSONL output to convert
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output Markdown file
    #[arg(short, long, default_value = "trufflehog-report.md")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct AggregateArgs {
    /// TruffleHog JSONL output to aggregate
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output JSON file
    #[arg(short, long, default_value = "trufflehog.json")]
    pub output: PathBuf,
}

pub fn execute(cmd: TrufflehogCommands, config: &MdreportConfig, output: &Output) -> Result<()> {
    let settings = RenderSettings::from_config(config);
    match cmd {
        TrufflehogCommands::Report(args) => {
            output.info(&format!("Reading TruffleHog output from {}", args.input.display()));
            let records = loader::load_jsonl(&args.input)?;
            let markdown = trufflehog::render_report(&records);
            let written = writer::write_report(&args.output, &markdown, settings.fallback_to_cwd)?;
            output.success(&format!("Markdown report saved to: {}", written.display()));
        }
        TrufflehogCommands::Aggregate(args) => {
            output.info(&format!("Reading TruffleHog output from {}", args.input.display()));
            let records = loader::load_jsonl(&args.input)?;
            let json = trufflehog::aggregate(&records)?;
            let written = writer::write_report(&args.output, &json, settings.fallback_to_cwd)?;
            output.success(&format!("Aggregated findings saved to: {}", written.display()));
        }
    }
    Ok(())
}
