use anyhow::Result;
use clap::Parser;

use mdreport::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
