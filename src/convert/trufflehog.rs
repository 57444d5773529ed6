//! TruffleHog findings to Markdown, plus JSONL aggregation
//!
//! TruffleHog emits one JSON object per line. Records without a
//! `DetectorName` are scanner chatter (progress lines, info messages) and
//! are skipped, matching the behavior of the downstream triage tooling.

use serde_json::{Value, json};

use crate::Result;
use crate::report::access::{bool_at, display_at, pluck, str_at};
use crate::report::markdown::Markdown;

/// One finding section, or None when the record is not a finding.
pub fn render_record(record: &Value) -> Option<String> {
    let detector = str_at(record, &["DetectorName"], "");
    if detector.is_empty() {
        return None;
    }

    let mut md = Markdown::new();
    md.heading(2, &format!("Report Overview: {}", str_at(record, &["SourceName"], "N/A")));
    md.bold_field("Source Name", &format!("`{}`", str_at(record, &["SourceName"], "N/A")));
    md.bold_field("Detector Name", &format!("`{}`", detector));
    md.bold_field(
        "Detector Description",
        &format!("`{}`", str_at(record, &["DetectorDescription"], "N/A")),
    );
    md.bold_field("Verified", &format!("`{}`", bool_at(record, &["Verified"], false)));
    md.bold_field("Raw Data", &format!("`{}`", str_at(record, &["Raw"], "N/A")));
    md.bold_field("Redacted Data", &format!("`{}`", str_at(record, &["Redacted"], "N/A")));
    md.rule();

    md.heading(3, "Extra Data");
    let extra = pluck(record, &["ExtraData"]);
    let cell = |key: &str| match extra {
        Some(extra) => display_at(extra, &[key], "N/A"),
        None => "N/A".to_string(),
    };
    md.table(
        &["Key", "Value"],
        &[
            vec!["Account".to_string(), cell("account")],
            vec!["ARN".to_string(), cell("arn")],
            vec!["Is Canary".to_string(), cell("is_canary")],
            vec!["Message".to_string(), cell("message")],
            vec!["Resource Type".to_string(), cell("resource_type")],
        ],
    );
    md.rule();
    Some(md.into_string())
}

/// All findings joined into one document; placeholder when every record
/// was skipped.
pub fn render_report(records: &[Value]) -> String {
    let sections: Vec<String> = records.iter().filter_map(render_record).collect();
    if sections.is_empty() {
        return "No findings found.\n".to_string();
    }
    sections.join("\n\n")
}

/// JSONL records bundled into a single `{"data": [...]}` document.
pub fn aggregate(records: &[Value]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json!({ "data": records }))?)
}
