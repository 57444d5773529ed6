//! Command implementations for the mdreport CLI
//!
//! Every command follows the same load, render, write shape; the
//! per-format logic lives in `crate::convert`.

pub mod blazemeter;
pub mod depcheck;
pub mod dive;
pub mod junit;
pub mod provenance;
pub mod sarif;
pub mod sbom;
pub mod tfsec;
pub mod trufflehog;

pub(crate) fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
