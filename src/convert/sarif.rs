//! SARIF to Markdown
//!
//! Two flavors. The summary is a compact per-run rule/message table, enough
//! for Semgrep-style output. The detailed report adds scan metadata, a
//! severity breakdown, per-rule query sections, and a findings table with
//! locations, matching what CodeQL pipelines publish.
//!
//! Rules are looked up across the driver and all extensions; a result with
//! no `level` falls back to its rule's `problem.severity`, then to `none`.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::report::access::{arr_at, display_at, pluck, pluck_or_null, str_at};
use crate::report::markdown::{Markdown, timestamp};
use crate::report::severity::{cvss_rating, level_emoji, title_case};

/// Compact report: one rule/message table per run.
pub fn render_summary(data: &Value) -> String {
    let mut md = Markdown::new();
    md.heading(1, "SARIF Analysis Report");
    md.bold_field("Generated on", &timestamp());
    md.rule();

    let runs = arr_at(data, &["runs"]);
    if runs.is_empty() {
        md.placeholder("runs");
        return md.into_string();
    }

    for run in runs {
        let name = str_at(run, &["tool", "driver", "name"], "Unknown Tool");
        let version = pluck(run, &["tool", "driver", "semanticVersion"])
            .or_else(|| pluck(run, &["tool", "driver", "version"]))
            .and_then(Value::as_str)
            .unwrap_or("Unknown Version");
        md.heading(2, &format!("Tool: {} (Version: {})", name, version));

        let rows: Vec<Vec<String>> = arr_at(run, &["results"])
            .iter()
            .map(|result| {
                vec![
                    str_at(result, &["ruleId"], "Unknown Rule").to_string(),
                    str_at(result, &["message", "text"], "No message provided").to_string(),
                ]
            })
            .collect();
        if rows.is_empty() {
            md.placeholder("results");
        } else {
            md.table(&["Rule ID", "Message"], &rows);
        }
    }
    md.into_string()
}

/// Full report with severity breakdown, query sections, and findings table.
pub fn render_detailed(data: &Value) -> String {
    let mut md = Markdown::new();
    add_header(data, &mut md);
    add_tool_info(data, &mut md);
    add_summary(data, &mut md);
    add_query_info(data, &mut md);
    add_findings(data, &mut md);
    md.into_string()
}

fn add_header(data: &Value, md: &mut Markdown) {
    let tool = arr_at(data, &["runs"])
        .first()
        .map(|run| str_at(run, &["tool", "driver", "name"], "Unknown Tool"))
        .unwrap_or("Unknown Tool");
    md.heading(1, "🔍 Static Analysis Security Report");
    md.heading(2, "Scan Details");
    md.bold_field("Scan Type", "Static Analysis");
    md.bold_field("Scan Date", &timestamp());
    md.bold_field("Operating System", std::env::consts::OS);
    md.bold_field("Analysis Tool", tool);
    md.rule();
}

fn add_tool_info(data: &Value, md: &mut Markdown) {
    let Some(run) = arr_at(data, &["runs"]).first() else {
        return;
    };
    md.heading(2, "🛠️ Analysis Details");
    md.key_value("Tool", str_at(run, &["tool", "driver", "name"], "Unknown Tool"));
    let version = pluck(run, &["tool", "driver", "semanticVersion"])
        .and_then(Value::as_str)
        .or_else(|| pluck(run, &["tool", "driver", "version"]).and_then(Value::as_str))
        .unwrap_or("N/A");
    md.key_value("Version", version);
    md.blank();
}

/// Rules keyed by id, collected from the driver and every extension.
fn rule_index(run: &Value) -> HashMap<&str, &Value> {
    let mut rules = HashMap::new();
    for rule in arr_at(run, &["tool", "driver", "rules"]) {
        if let Some(id) = pluck(rule, &["id"]).and_then(Value::as_str) {
            rules.insert(id, rule);
        }
    }
    for ext in arr_at(run, &["tool", "extensions"]) {
        for rule in arr_at(ext, &["rules"]) {
            if let Some(id) = pluck(rule, &["id"]).and_then(Value::as_str) {
                rules.insert(id, rule);
            }
        }
    }
    rules
}

fn result_level(result: &Value, rules: &HashMap<&str, &Value>) -> String {
    let rule_id = str_at(result, &["ruleId"], "unknown");
    let rule_severity = rules
        .get(rule_id)
        .copied()
        .map(|rule| str_at(rule, &["properties", "problem.severity"], "none"))
        .unwrap_or("none");
    str_at(result, &["level"], rule_severity).to_lowercase()
}

fn add_summary(data: &Value, md: &mut Markdown) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;

    for run in arr_at(data, &["runs"]) {
        let rules = rule_index(run);
        for result in arr_at(run, &["results"]) {
            let level = result_level(result, &rules);
            *counts.entry(level).or_insert(0) += 1;
            total += 1;
        }
    }

    md.heading(2, "📊 Analysis Summary");
    md.bold_field("Total Issues Found", &total.to_string());
    md.heading(3, "Severity Breakdown");
    for severity in ["error", "warning", "note", "none"] {
        let count = counts.get(severity).copied().unwrap_or(0);
        md.bullet(&format!(
            "{} **{}**: {}",
            level_emoji(severity),
            title_case(severity),
            count
        ));
    }
    md.blank();
}

fn add_query_info(data: &Value, md: &mut Markdown) {
    md.heading(2, "📝 Query Information");

    let mut seen = HashSet::new();
    for run in arr_at(data, &["runs"]) {
        for rule in arr_at(run, &["tool", "driver", "rules"]) {
            let Some(id) = pluck(rule, &["id"]).and_then(Value::as_str) else {
                continue;
            };
            if !seen.insert(id.to_string()) {
                continue;
            }

            md.heading(3, str_at(rule, &["name"], id));
            md.key_value("ID", &format!("`{}`", id));
            if let Some(score) = pluck(rule, &["properties", "security-severity"]) {
                md.key_value("CVSS Score", &cvss_rating(Some(score)));
            }
            let severity = str_at(rule, &["properties", "problem.severity"], "none");
            md.key_value(
                "Severity",
                &format!("{} {}", level_emoji(severity), title_case(severity)),
            );
            if let Some(tags) = pluck(rule, &["properties", "tags"]).and_then(Value::as_array) {
                let tags: Vec<String> = tags
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|tag| format!("`{}`", tag))
                    .collect();
                if !tags.is_empty() {
                    md.key_value("Tags", &tags.join(", "));
                }
            }
            md.blank();
            md.line(str_at(rule, &["description", "text"], "No description available"));
            md.blank();
        }
    }
    if seen.is_empty() {
        md.placeholder("queries");
    }
}

fn add_findings(data: &Value, md: &mut Markdown) {
    md.heading(2, "🔍 Detailed Findings");

    let mut rows = Vec::new();
    for run in arr_at(data, &["runs"]) {
        let rules = rule_index(run);
        for result in arr_at(run, &["results"]) {
            let rule_id = str_at(result, &["ruleId"], "unknown");
            let rule_name = rules
                .get(rule_id)
                .copied()
                .map(|rule| str_at(rule, &["name"], rule_id))
                .unwrap_or(rule_id);
            let level = result_level(result, &rules);
            rows.push(vec![
                format!("{} {}", level_emoji(&level), title_case(&level)),
                rule_name.to_string(),
                format_location(arr_at(result, &["locations"])),
                str_at(result, &["message", "text"], "No description available").to_string(),
            ]);
        }
    }

    if rows.is_empty() {
        md.placeholder("findings");
    } else {
        md.table(&["Severity", "Query", "Location", "Description"], &rows);
    }
}

fn format_location(locations: &[Value]) -> String {
    let Some(first) = locations.first() else {
        return "N/A".to_string();
    };
    let physical = pluck_or_null(first, &["physicalLocation"]);
    let file = str_at(physical, &["artifactLocation", "uri"], "unknown");
    let start = display_at(physical, &["region", "startLine"], "?");
    let end = display_at(physical, &["region", "endLine"], &start);
    let mut location = format!("`{}:{}`", file, start);
    if start != end {
        location.push_str(&format!("-`{}`", end));
    }
    location
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_sarif() -> Value {
        json!({
            "runs": [{
                "tool": {"driver": {"name": "TestTool", "semanticVersion": "1.2.3"}},
                "results": [{
                    "ruleId": "R1",
                    "message": {"text": "Example"}
                }]
            }]
        })
    }

    #[test]
    fn detailed_findings_row_for_minimal_document() {
        let text = render_detailed(&minimal_sarif());
        assert!(text.contains("| ⚪ None | R1 | N/A | Example |"));
    }

    #[test]
    fn summary_counts_default_level_as_none() {
        let text = render_detailed(&minimal_sarif());
        assert!(text.contains("**Total Issues Found:** 1"));
        assert!(text.contains("⚪ **None**: 1"));
        assert!(text.contains("🔴 **Error**: 0"));
    }

    #[test]
    fn level_falls_back_to_rule_severity() {
        let data = json!({
            "runs": [{
                "tool": {"driver": {"name": "T", "rules": [
                    {"id": "R2", "name": "Bad Thing", "properties": {"problem.severity": "warning"}}
                ]}},
                "results": [{"ruleId": "R2", "message": {"text": "m"}}]
            }]
        });
        let text = render_detailed(&data);
        assert!(text.contains("| 🟡 Warning | Bad Thing |"));
    }

    #[test]
    fn extension_rules_are_indexed() {
        let data = json!({
            "runs": [{
                "tool": {
                    "driver": {"name": "T"},
                    "extensions": [{"rules": [{"id": "E1", "name": "Ext Rule"}]}]
                },
                "results": [{"ruleId": "E1", "level": "error", "message": {"text": "m"}}]
            }]
        });
        let text = render_detailed(&data);
        assert!(text.contains("| 🔴 Error | Ext Rule |"));
    }

    #[test]
    fn location_renders_file_line_and_range() {
        let single = json!([{"physicalLocation": {
            "artifactLocation": {"uri": "src/a.rs"},
            "region": {"startLine": 4}
        }}]);
        assert_eq!(format_location(single.as_array().unwrap()), "`src/a.rs:4`");

        let range = json!([{"physicalLocation": {
            "artifactLocation": {"uri": "src/a.rs"},
            "region": {"startLine": 4, "endLine": 9}
        }}]);
        assert_eq!(format_location(range.as_array().unwrap()), "`src/a.rs:4`-`9`");

        assert_eq!(format_location(&[]), "N/A");
    }

    #[test]
    fn summary_table_lists_rule_and_message() {
        let text = render_summary(&minimal_sarif());
        assert!(text.contains("## Tool: TestTool (Version: 1.2.3)"));
        assert!(text.contains("| R1 | Example |"));
    }

    #[test]
    fn empty_document_renders_placeholders() {
        let text = render_summary(&json!({}));
        assert!(text.contains("No runs found."));
        let text = render_detailed(&json!({"runs": []}));
        assert!(text.contains("No findings found."));
    }
}
