//! Command-line interface for mdreport
//!
//! One subcommand per report format. Global flags control config file
//! selection and output verbosity; everything else lives on the
//! per-command argument structs.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::config::MdreportConfig;

pub mod commands;
mod output;

pub use output::Output;

/// mdreport - Convert scanner and test reports to Markdown
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a SARIF static analysis report
    Sarif(commands::sarif::SarifArgs),
    /// Convert an SBOM document
    #[command(subcommand)]
    Sbom(commands::sbom::SbomCommands),
    /// Convert an OWASP Dependency-Check report
    Depcheck(commands::depcheck::DepcheckArgs),
    /// Convert a tfsec scan report
    Tfsec(commands::tfsec::TfsecArgs),
    /// Convert a Dive image analysis report
    Dive(commands::dive::DiveArgs),
    /// JUnit test result conversions
    #[command(subcommand)]
    Junit(commands::junit::JunitCommands),
    /// SLSA provenance conversions
    #[command(subcommand)]
    Provenance(commands::provenance::ProvenanceCommands),
    /// TruffleHog secret scan conversions
    #[command(subcommand)]
    Trufflehog(commands::trufflehog::TrufflehogCommands),
    /// Convert a BlazeMeter aggregate report
    Blazemeter(commands::blazemeter::BlazemeterArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        commands::setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);
        let config = MdreportConfig::load_with_custom_config(self.config.as_deref())?;

        match self.command {
            Some(Commands::Sarif(args)) => commands::sarif::execute(args, &config, &output),
            Some(Commands::Sbom(cmd)) => commands::sbom::execute(cmd, &config, &output),
            Some(Commands::Depcheck(args)) => commands::depcheck::execute(args, &config, &output),
            Some(Commands::Tfsec(args)) => commands::tfsec::execute(args, &config, &output),
            Some(Commands::Dive(args)) => commands::dive::execute(args, &config, &output),
            Some(Commands::Junit(cmd)) => commands::junit::execute(cmd, &config, &output),
            Some(Commands::Provenance(cmd)) => {
                commands::provenance::execute(cmd, &config, &output)
            }
            Some(Commands::Trufflehog(cmd)) => {
                commands::trufflehog::execute(cmd, &config, &output)
            }
            Some(Commands::Blazemeter(args)) => {
                commands::blazemeter::execute(args, &config, &output)
            }
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
