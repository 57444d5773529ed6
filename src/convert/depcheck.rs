//! OWASP Dependency-Check to Markdown
//!
//! The busiest converter: report metadata, scan info with data-source
//! freshness, a security summary, then a section per analyzed dependency
//! with hashes, identified packages, collected evidence, and a
//! vulnerability table. Description and reference cells are truncated to
//! the configured budgets to keep the tables readable.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::RenderSettings;
use crate::report::access::{arr_at, display, display_at, i64_at, pluck, str_at};
use crate::report::markdown::{Markdown, timestamp, truncate};
use crate::report::severity::{cvss_score_cell, title_case};

pub fn render(data: &Value, settings: &RenderSettings) -> String {
    let mut md = Markdown::new();
    md.heading(1, "OWASP Dependency Check Security Report");
    md.bold_field("Generated", &timestamp());
    md.bold_field("Report Schema Version", &display_at(data, &["reportSchema"], "N/A"));

    add_project_info(data, &mut md);
    add_scan_info(data, &mut md);
    add_summary(data, &mut md);
    add_dependencies(data, &mut md, settings);

    md.rule();
    md.into_string()
}

fn add_project_info(data: &Value, md: &mut Markdown) {
    let Some(info) = pluck(data, &["projectInfo"]) else {
        return;
    };
    md.heading(2, "Report Information");
    md.key_value("Project Name", str_at(info, &["name"], "N/A"));
    md.key_value("Report Date", str_at(info, &["reportDate"], "N/A"));

    if let Some(credits) = pluck(info, &["credits"]).and_then(Value::as_object) {
        md.blank();
        md.heading(3, "Data Sources and Credits");
        for (source, description) in credits {
            md.key_value(source, &display(description));
        }
    }
    md.blank();
}

fn add_scan_info(data: &Value, md: &mut Markdown) {
    let Some(info) = pluck(data, &["scanInfo"]) else {
        return;
    };
    md.heading(2, "Scan Information");
    md.key_value("Scan Engine Version", str_at(info, &["engineVersion"], "N/A"));

    let sources = arr_at(info, &["dataSource"]);
    if !sources.is_empty() {
        md.blank();
        md.heading(3, "Data Sources");
        let rows: Vec<Vec<String>> = sources
            .iter()
            .map(|source| {
                let stamp = format_iso(str_at(source, &["timestamp"], "N/A"));
                vec![
                    str_at(source, &["name"], "N/A").to_string(),
                    stamp.clone(),
                    stamp,
                ]
            })
            .collect();
        md.table(&["Data Source", "Last Checked", "Last Modified"], &rows);
    }

    let duration = str_at(info, &["scanDuration"], "N/A");
    if duration != "N/A" {
        md.key_value("Scan Duration", duration);
    }
    md.blank();
}

/// ISO-8601 timestamps reformat to the report convention; anything else
/// passes through untouched.
fn format_iso(stamp: &str) -> String {
    DateTime::parse_from_rfc3339(stamp)
        .map(|dt| dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|_| stamp.to_string())
}

fn add_summary(data: &Value, md: &mut Markdown) {
    let total = i64_at(data, &["summary", "totalDependencies"], 0);
    let vulnerable = i64_at(data, &["summary", "vulnerableDependencies"], 0);
    let vulns = i64_at(data, &["summary", "totalVulnerabilities"], 0);

    md.heading(2, "Security Summary");
    md.key_value("Total Dependencies Analyzed", &total.to_string());
    md.key_value("Vulnerable Dependencies", &vulnerable.to_string());
    md.key_value("Total Vulnerabilities Found", &vulns.to_string());
    if total > 0 {
        let rate = (vulnerable as f64 / total as f64) * 100.0;
        md.key_value("Vulnerability Rate", &format!("{:.1}%", rate));
    }

    if let Some(counts) = pluck(data, &["summary", "severityCounts"]).and_then(Value::as_object) {
        md.blank();
        md.heading(3, "Severity Breakdown");
        for (severity, count) in counts {
            let count = count.as_i64().unwrap_or(0);
            if count > 0 {
                md.key_value(&title_case(severity), &count.to_string());
            }
        }
    }
    md.blank();
}

fn add_dependencies(data: &Value, md: &mut Markdown, settings: &RenderSettings) {
    md.heading(2, "Dependencies Analysis");
    let dependencies = arr_at(data, &["dependencies"]);
    if dependencies.is_empty() {
        md.placeholder("dependencies");
        return;
    }

    for dep in dependencies {
        md.heading(3, str_at(dep, &["fileName"], "Unknown"));
        md.key_value("File Path", &format!("`{}`", str_at(dep, &["filePath"], "Unknown")));
        md.key_value("Is Virtual", &display_at(dep, &["isVirtual"], "false"));
        md.key_value("MD5", &format!("`{}`", str_at(dep, &["md5"], "N/A")));
        md.key_value("SHA1", &format!("`{}`", str_at(dep, &["sha1"], "N/A")));
        md.key_value("SHA256", &format!("`{}`", str_at(dep, &["sha256"], "N/A")));
        md.blank();

        let packages = arr_at(dep, &["packages"]);
        if !packages.is_empty() {
            md.heading(4, "Packages");
            for (i, pkg) in packages.iter().enumerate() {
                md.line(format!("**Package {}:**", i + 1));
                md.key_value("ID", &format!("`{}`", str_at(pkg, &["id"], "Unknown")));
                md.key_value("Confidence", &display_at(pkg, &["confidence"], "N/A"));
                md.blank();
            }
        }

        if let Some(evidence) = pluck(dep, &["evidenceCollected"]) {
            md.heading(4, "Evidence Collected");
            add_evidence(md, "Product Evidence", arr_at(evidence, &["productEvidence"]));
            add_evidence(md, "Vendor Evidence", arr_at(evidence, &["vendorEvidence"]));
            add_evidence(md, "Version Evidence", arr_at(evidence, &["versionEvidence"]));
        }

        let vulnerabilities = arr_at(dep, &["vulnerabilities"]);
        md.heading(4, &format!("Vulnerabilities Found: {}", vulnerabilities.len()));
        if !vulnerabilities.is_empty() {
            add_vulnerability_table(md, vulnerabilities, settings);
        }

        md.rule();
    }
}

fn add_evidence(md: &mut Markdown, title: &str, items: &[Value]) {
    if items.is_empty() {
        return;
    }
    md.line(format!("**{}:**", title));
    for item in items {
        md.bullet(&format!(
            "**{}:** {} (Confidence: {}, Source: {})",
            str_at(item, &["name"], "N/A"),
            str_at(item, &["value"], "N/A"),
            str_at(item, &["confidence"], "N/A"),
            str_at(item, &["source"], "N/A")
        ));
    }
    md.blank();
}

fn add_vulnerability_table(md: &mut Markdown, vulnerabilities: &[Value], settings: &RenderSettings) {
    let rows: Vec<Vec<String>> = vulnerabilities
        .iter()
        .map(|vuln| {
            let score = pluck(vuln, &["cvssv3", "baseScore"]).and_then(Value::as_f64);
            let description = truncate(
                str_at(vuln, &["description"], "No description available"),
                settings.description_limit,
            );
            let references = truncate(
                &format_references(arr_at(vuln, &["references"])),
                settings.reference_limit,
            );
            vec![
                str_at(vuln, &["name"], "N/A").to_string(),
                str_at(vuln, &["severity"], "Unknown").to_string(),
                cvss_score_cell(score),
                description,
                references,
            ]
        })
        .collect();
    md.table(
        &["CVE ID", "Severity", "CVSS Score", "Description", "References"],
        &rows,
    );
}

fn format_references(references: &[Value]) -> String {
    if references.is_empty() {
        return "No references available".to_string();
    }
    references
        .iter()
        .map(|reference| {
            let name = str_at(reference, &["name"], "Unknown");
            let url = str_at(reference, &["url"], "");
            if url.is_empty() {
                name.to_string()
            } else {
                format!("[{}]({})", name, url)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
