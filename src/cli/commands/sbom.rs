//! SBOM conversion commands
//!
//! SPDX and CycloneDX documents share the same pipeline but different
//! renderers, so each gets its own subcommand.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::Output;
use crate::config::{MdreportConfig, RenderSettings};
use crate::convert::sbom;
use crate::report::{loader, writer};

#[derive(Subcommand)]
pub enum SbomCommands {
    /// Convert an SPDX JSON document
    Spdx(SbomArgs),
    /// Convert a CycloneDX JSON document
    Cyclonedx(SbomArgs),
}

#[derive(Args)]
pub struct SbomArgs {
    /// SBOM document to convert
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output Markdown file
    #[arg(short, long, default_value = "sbom-summary.md")]
    pub output: PathBuf,
}

pub fn execute(cmd: SbomCommands, config: &MdreportConfig, output: &Output) -> Result<()> {
    let settings = RenderSettings::from_config(config);
    let (args, markdown) = match cmd {
        SbomCommands::Spdx(args) => {
            output.info(&format!("Reading SPDX document from {}", args.input.display()));
            let data = loader::load_json(&args.input)?;
            let markdown = sbom::render_spdx(&data);
            (args, markdown)
        }
        SbomCommands::Cyclonedx(args) => {
            output.info(&format!("Reading CycloneDX document from {}", args.input.display()));
            let data = loader::load_json(&args.input)?;
            let markdown = sbom::render_cyclonedx(&data);
            (args, markdown)
        }
    };

    let written = writer::write_report(&args.output, &markdown, settings.fallback_to_cwd)?;
    output.success(&format!("Markdown report saved to: {}", written.display()));
    Ok(())
}
