//! Report converters
//!
//! One module per report family. Each exposes pure render functions that
//! take a parsed tree and return the finished Markdown (or JSON) text, so
//! the CLI commands stay a load / render / write sandwich and the renderers
//! stay unit-testable without touching the filesystem.

pub mod blazemeter;
pub mod depcheck;
pub mod dive;
pub mod junit;
pub mod provenance;
pub mod sarif;
pub mod sbom;
pub mod tfsec;
pub mod trufflehog;
