//! SLSA provenance conversion commands

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::Output;
use crate::config::{MdreportConfig, RenderSettings};
use crate::convert::provenance;
use crate::report::{loader, writer};

#[derive(Subcommand)]
pub enum ProvenanceCommands {
    /// Convert a full in-toto provenance statement
    Statement(StatementArgs),
    /// Convert a bare SLSA v1 predicate
    Predicate(PredicateArgs),
}

#[derive(Args)]
pub struct StatementArgs {
    /// Provenance statement JSON to convert
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output Markdown file
    #[arg(short, long, default_value = "slsa-statement.md")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct PredicateArgs {
    /// Provenance predicate JSON to convert
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output Markdown file
    #[arg(short, long, default_value = "slsa-predicate.md")]
    pub output: PathBuf,
}

pub fn execute(cmd: ProvenanceCommands, config: &MdreportConfig, output: &Output) -> Result<()> {
    let settings = RenderSettings::from_config(config);
    let (input, destination, markdown) = match cmd {
        ProvenanceCommands::Statement(args) => {
            let data = loader::load_json(&args.input)?;
            (args.input, args.output, provenance::render_statement(&data))
        }
        ProvenanceCommands::Predicate(args) => {
            let data = loader::load_json(&args.input)?;
            (args.input, args.output, provenance::render_predicate(&data))
        }
    };

    output.info(&format!("Converted provenance from {}", input.display()));
    let written = writer::write_report(&destination, &markdown, settings.fallback_to_cwd)?;
    output.success(&format!("Markdown report saved to: {}", written.display()));
    Ok(())
}
