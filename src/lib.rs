//! # mdreport - Scanner Reports to Markdown
//!
//! Converts the JSON, JSON-Lines, and XML reports produced by scanning and
//! testing tools into human-readable Markdown summaries.
//!
//! ## Supported report families
//!
//! - **SARIF**: CodeQL, Semgrep, and other static-analysis output
//! - **SBOM**: SPDX and CycloneDX component manifests
//! - **Dependency-Check**: OWASP dependency vulnerability reports
//! - **tfsec / Dive / BlazeMeter**: infrastructure, image, and load-test reports
//! - **JUnit**: XML and JSON test results
//! - **SLSA provenance**: in-toto statements and v1 predicates
//! - **TruffleHog**: JSON-Lines secret scan results
//!
//! ## Quick Start
//!
//! ```bash
//! # Install mdreport
//! cargo install mdreport
//!
//! # Convert a SARIF scan to Markdown
//! mdreport sarif results.sarif -o results.md --detailed
//!
//! # Summarize a JUnit run
//! mdreport junit convert results.xml -o results.json
//! mdreport junit report results.json -o results.md
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod report;

pub use cli::{Cli, Output};
pub use config::MdreportConfig;

/// Result type alias for mdreport operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
