//! Shared report toolkit
//!
//! Every converter is the same three-stage pipeline: load a structured file,
//! walk it with defensive field access, render Markdown fragments. The pieces
//! of that pipeline live here so the converters stay thin.

pub mod access;
pub mod loader;
pub mod markdown;
pub mod severity;
pub mod writer;
pub mod xml;
