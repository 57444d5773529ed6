//! BlazeMeter aggregate report to Markdown
//!
//! The aggregate endpoint returns one row per label; the `ALL` row is the
//! whole-test summary, with the first row as a fallback when it is absent.

use serde_json::Value;

use crate::report::access::{arr_at, display_at, pluck, str_at};
use crate::report::markdown::{Markdown, timestamp};

pub fn render(data: &Value, artifact_name: &str, test_id: &str) -> String {
    let mut md = Markdown::new();
    md.heading(1, "BlazeMeter Performance Test Report");
    md.bold_field("Artifact Name", artifact_name);
    md.bold_field("Test ID", test_id);
    md.bold_field("Execution Date", &timestamp());

    let results = arr_at(data, &["result"]);
    let summary = results
        .iter()
        .find(|item| str_at(item, &["labelName"], "") == "ALL")
        .or_else(|| results.first());

    let Some(summary) = summary else {
        md.heading(2, "No Performance Summary Data Found");
        md.line("The aggregate report did not contain expected summary data.");
        md.blank();
        return md.into_string();
    };

    md.heading(2, "Test Summary");
    let rows = vec![
        metric("Total Samples", display_at(summary, &["samples"], "N/A")),
        metric("Avg Response Time", float_unit(summary, "avgResponseTime", "ms")),
        metric("Median Response", unit(summary, "medianResponseTime", "ms")),
        metric("90th Percentile", unit(summary, "90line", "ms")),
        metric("95th Percentile", unit(summary, "95line", "ms")),
        metric("99th Percentile", unit(summary, "99line", "ms")),
        metric("Min Response Time", unit(summary, "minResponseTime", "ms")),
        metric("Max Response Time", unit(summary, "maxResponseTime", "ms")),
        metric("Avg Latency", float_unit(summary, "avgLatency", "ms")),
        metric("Std Deviation", float_unit(summary, "stDev", "")),
        metric("Total Duration", unit(summary, "duration", "seconds")),
        metric("Avg Throughput", float_unit(summary, "avgThroughput", "req/s")),
        metric("Error Count", display_at(summary, &["errorsCount"], "N/A")),
        metric("Error Rate", percent(summary, "errorsRate")),
        metric("Concurrency", display_at(summary, &["concurrency"], "N/A")),
    ];
    md.table(&["Metric", "Value"], &rows);
    md.into_string()
}

fn metric(name: &str, value: String) -> Vec<String> {
    vec![format!("**{}**", name), value]
}

fn unit(summary: &Value, key: &str, suffix: &str) -> String {
    let value = display_at(summary, &[key], "N/A");
    if value == "N/A" || suffix.is_empty() {
        value
    } else {
        format!("{} {}", value, suffix)
    }
}

fn float_unit(summary: &Value, key: &str, suffix: &str) -> String {
    match pluck(summary, &[key]).and_then(Value::as_f64) {
        Some(v) if suffix.is_empty() => format!("{:.2}", v),
        Some(v) => format!("{:.2} {}", v, suffix),
        None => "N/A".to_string(),
    }
}

fn percent(summary: &Value, key: &str) -> String {
    match pluck(summary, &[key]).and_then(Value::as_f64) {
        Some(v) => format!("{:.2}%", v),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefers_the_all_label_row() {
        let data = json!({"result": [
            {"labelName": "login", "samples": 10},
            {"labelName": "ALL", "samples": 500, "avgResponseTime": 12.345, "errorsRate": 1.5}
        ]});
        let text = render(&data, "build-42", "t-1");
        assert!(text.contains("**Artifact Name:** build-42"));
        assert!(text.contains("| **Total Samples** | 500 |"));
        assert!(text.contains("| **Avg Response Time** | 12.35 ms |"));
        assert!(text.contains("| **Error Rate** | 1.50% |"));
    }

    #[test]
    fn falls_back_to_first_row() {
        let data = json!({"result": [{"labelName": "login", "samples": 10}]});
        let text = render(&data, "a", "t");
        assert!(text.contains("| **Total Samples** | 10 |"));
        assert!(text.contains("| **Avg Response Time** | N/A |"));
    }

    #[test]
    fn missing_result_array_renders_no_data_section() {
        let text = render(&json!({}), "a", "t");
        assert!(text.contains("## No Performance Summary Data Found"));
    }
}
