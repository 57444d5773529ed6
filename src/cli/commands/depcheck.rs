//! Dependency-Check conversion command

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use crate::cli::Output;
use crate::config::{MdreportConfig, RenderSettings};
use crate::convert::depcheck;
use crate::report::{loader, writer};

#[derive(Args)]
pub struct DepcheckArgs {
    /// Dependency-Check JSON report to convert
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output Markdown file (defaults to <input-stem>-report.md)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: DepcheckArgs, config: &MdreportConfig, output: &Output) -> Result<()> {
    let settings = RenderSettings::from_config(config);
    output.info(&format!(
        "Reading Dependency-Check report from {}",
        args.input.display()
    ));

    let data = loader::load_json(&args.input)?;
    let markdown = depcheck::render(&data, &settings);

    let destination = args.output.unwrap_or_else(|| derive_output(&args.input));
    let written = writer::write_report(&destination, &markdown, settings.fallback_to_cwd)?;
    output.success(&format!("Markdown report saved to: {}", written.display()));
    Ok(())
}

/// `dependency-check-report.json` becomes `dependency-check-report.md`, any
/// other name gets `-report.md` appended to its stem.
fn derive_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dependency-check");
    let base = stem.strip_suffix("-report").unwrap_or(stem);
    input.with_file_name(format!("{}-report.md", base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_derives_from_input_stem() {
        assert_eq!(
            derive_output(Path::new("dependency-check-report.json")),
            PathBuf::from("dependency-check-report.md")
        );
        assert_eq!(
            derive_output(Path::new("scans/app.json")),
            PathBuf::from("scans/app-report.md")
        );
    }
}
