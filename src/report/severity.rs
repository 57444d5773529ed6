//! Severity and status classification
//!
//! The severity-to-label tables the converters share. CVSS bucketing is
//! boundary-inclusive: 9.0 is Critical, 7.0 is High, 6.99 is Medium.

use serde_json::Value;

/// CVSS bucket label for a numeric score.
pub fn cvss_label(score: f64) -> &'static str {
    if score >= 9.0 {
        "Critical"
    } else if score >= 7.0 {
        "High"
    } else if score >= 4.0 {
        "Medium"
    } else if score >= 0.1 {
        "Low"
    } else {
        "None"
    }
}

/// Rating string for SARIF `security-severity` properties, which arrive as
/// strings. Absent values render as `N/A`; unparseable ones pass through
/// verbatim rather than erroring.
pub fn cvss_rating(raw: Option<&Value>) -> String {
    let Some(raw) = raw else {
        return "N/A".to_string();
    };
    let text = match raw {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    };
    if text.is_empty() {
        return "N/A".to_string();
    }
    match text.parse::<f64>() {
        Ok(score) => format!("{} ({})", cvss_label(score), score),
        Err(_) => text,
    }
}

/// Bold score cell used by vulnerability tables, e.g. `**9.8 (Critical)**`.
pub fn cvss_score_cell(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("**{:.1} ({})**", s, cvss_label(s)),
        None => "N/A".to_string(),
    }
}

/// Marker emoji for SARIF result levels. Unknown levels get the neutral dot.
pub fn level_emoji(level: &str) -> &'static str {
    match level.to_ascii_lowercase().as_str() {
        "error" => "🔴",
        "warning" => "🟡",
        "note" => "🔵",
        _ => "⚪",
    }
}

/// Short tag for test case outcomes.
pub fn status_marker(status: &str) -> &'static str {
    match status {
        "passed" => "PASS",
        "failed" => "FAIL",
        "skipped" => "SKIP",
        _ => "UNKNOWN",
    }
}

/// Uppercase the first character: "error" -> "Error".
pub fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
