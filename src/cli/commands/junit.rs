//! JUnit conversion commands
//!
//! `convert` turns raw JUnit XML into consolidated JSON, `report` renders
//! that JSON as a full execution report, and `summary` digests the
//! `testReport` summary schema.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::Output;
use crate::config::{MdreportConfig, RenderSettings};
use crate::convert::junit;
use crate::report::{loader, writer, xml};

#[derive(Subcommand)]
pub enum JunitCommands {
    /// Convert JUnit XML to consolidated JSON
    Convert(ConvertArgs),
    /// Render consolidated JSON as a test execution report
    Report(ReportArgs),
    /// Render a test summary document as a results digest
    Summary(SummaryArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// JUnit XML file to convert
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output JSON file (defaults to the input with a .json extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Consolidated JUnit JSON to render
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output Markdown file
    #[arg(short, long, default_value = "test-report.md")]
    pub output: PathBuf,

    /// Package URL to include in the suite summary
    #[arg(long)]
    pub package_url: Option<String>,
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Test summary JSON to render
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output Markdown file
    #[arg(short, long, default_value = "junit-results.md")]
    pub output: PathBuf,
}

pub fn execute(cmd: JunitCommands, config: &MdreportConfig, output: &Output) -> Result<()> {
    let settings = RenderSettings::from_config(config);
    match cmd {
        JunitCommands::Convert(args) => {
            output.info(&format!("Reading JUnit XML from {}", args.input.display()));
            let root = xml::parse_file(&args.input)?;
            let json = serde_json::to_string_pretty(&junit::xml_to_json(&root))?;
            let destination = args
                .output
                .unwrap_or_else(|| args.input.with_extension("json"));
            let written = writer::write_report(&destination, &json, settings.fallback_to_cwd)?;
            output.success(&format!("JSON results saved to: {}", written.display()));
        }
        JunitCommands::Report(args) => {
            output.info(&format!("Reading JUnit results from {}", args.input.display()));
            let data = loader::load_json(&args.input)?;
            let markdown = junit::render_report(&data, args.package_url.as_deref());
            let written = writer::write_report(&args.output, &markdown, settings.fallback_to_cwd)?;
            output.success(&format!("Markdown report saved to: {}", written.display()));
        }
        JunitCommands::Summary(args) => {
            output.info(&format!("Reading test summary from {}", args.input.display()));
            let data = loader::load_json(&args.input)?;
            let markdown = junit::render_summary(&data);
            let written = writer::write_report(&args.output, &markdown, settings.fallback_to_cwd)?;
            output.success(&format!("Markdown report saved to: {}", written.display()));
        }
    }
    Ok(())
}
