//! Report file loading
//!
//! A missing input file and malformed content are the only fatal conditions
//! in the whole pipeline, so both get errors that name the offending path.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Parse a JSON document into a generic tree.
pub fn load_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Parse a JSON-Lines file into one tree per non-blank line.
pub fn load_jsonl(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {} of {}", idx + 1, path.display()))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_json_reports_missing_path() {
        let err = load_json(Path::new("/nonexistent/report.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/report.json"));
    }

    #[test]
    fn load_json_reports_malformed_content() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = load_json(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn load_jsonl_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"a\": 1}}\n\n{{\"b\": 2}}\n").unwrap();
        let records = load_jsonl(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn load_jsonl_names_bad_line() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"a\": 1}}\nnope\n").unwrap();
        let err = load_jsonl(file.path()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
