//! JUnit test results
//!
//! Three operations that chain together in CI pipelines:
//!
//! - `xml_to_json`: flatten a JUnit XML file into the consolidated
//!   testsuites/testsuite/testcase JSON shape. Case status is derived from
//!   the presence of a `failure`, `error`, or `skipped` child element.
//! - `render_report`: that JSON shape to a Markdown execution report with
//!   per-suite tables and failure/error detail blocks.
//! - `render_summary`: the `testReport` summary schema some runners emit,
//!   to a Markdown digest with tests grouped by class.

use serde_json::{Value, json};

use crate::report::access::{arr_at, display_at, f64_at, i64_at, str_at};
use crate::report::markdown::{Markdown, timestamp};
use crate::report::severity::status_marker;
use crate::report::xml::{XmlElement, container};

/// Flatten a parsed JUnit XML tree into consolidated JSON.
pub fn xml_to_json(root: &XmlElement) -> Value {
    let top = container(root, &["testsuites", "testsuite"]);

    let mut suite_elements = top.descendants("testsuite");
    if suite_elements.is_empty() {
        // Single-suite documents carry the cases directly on the container
        suite_elements.push(top);
    }

    let suites: Vec<Value> = suite_elements.iter().map(|suite| suite_json(suite)).collect();

    json!({
        "testsuites": {
            "name": top.attr("name").unwrap_or("Unknown"),
            "tests": attr_i64(top, "tests"),
            "failures": attr_i64(top, "failures"),
            "errors": attr_i64(top, "errors"),
            "skipped": attr_i64(top, "skipped"),
            "time": attr_f64(top, "time"),
            "testsuite": suites,
        }
    })
}

fn suite_json(suite: &XmlElement) -> Value {
    let cases: Vec<Value> = suite
        .descendants("testcase")
        .iter()
        .map(|case| case_json(case))
        .collect();
    json!({
        "name": suite.attr("name").unwrap_or("Unknown"),
        "tests": attr_i64(suite, "tests"),
        "failures": attr_i64(suite, "failures"),
        "errors": attr_i64(suite, "errors"),
        "skipped": attr_i64(suite, "skipped"),
        "time": attr_f64(suite, "time"),
        "testcase": cases,
    })
}

fn case_json(case: &XmlElement) -> Value {
    let mut data = json!({
        "name": case.attr("name").unwrap_or("Unknown"),
        "classname": case.attr("classname").unwrap_or("Unknown"),
        "time": attr_f64(case, "time"),
        "status": "passed",
    });
    if let Some(failure) = case.child("failure") {
        data["status"] = json!("failed");
        data["failure"] = outcome_json(failure);
    } else if let Some(error) = case.child("error") {
        data["status"] = json!("error");
        data["error"] = outcome_json(error);
    } else if let Some(skipped) = case.child("skipped") {
        data["status"] = json!("skipped");
        data["skipped"] = json!({
            "message": skipped.attr("message").unwrap_or(""),
            "text": skipped.text,
        });
    }
    data
}

fn outcome_json(element: &XmlElement) -> Value {
    json!({
        "message": element.attr("message").unwrap_or(""),
        "type": element.attr("type").unwrap_or(""),
        "text": element.text,
    })
}

fn attr_i64(element: &XmlElement, name: &str) -> i64 {
    element.attr(name).and_then(|v| v.parse().ok()).unwrap_or(0)
}

fn attr_f64(element: &XmlElement, name: &str) -> f64 {
    element.attr(name).and_then(|v| v.parse().ok()).unwrap_or(0.0)
}

/// Consolidated JUnit JSON to a Markdown execution report.
pub fn render_report(data: &Value, package_url: Option<&str>) -> String {
    let total_tests = i64_at(data, &["testsuites", "tests"], 0);
    let total_failures = i64_at(data, &["testsuites", "failures"], 0);
    let total_errors = i64_at(data, &["testsuites", "errors"], 0);
    let total_time = f64_at(data, &["testsuites", "time"], 0.0);
    let total_passed = total_tests - total_failures - total_errors;
    let success_rate = if total_tests > 0 {
        total_passed as f64 / total_tests as f64 * 100.0
    } else {
        0.0
    };

    let mut md = Markdown::new();
    md.heading(1, "JUnit Test Execution Report");
    md.heading(2, "Test Suite Summary");
    md.bold_field("Suite Name", str_at(data, &["testsuites", "name"], "Unknown Test Suite"));
    md.bold_field("Execution Date", &timestamp());
    if let Some(url) = package_url {
        md.bold_field("Package URL", url);
    }

    md.heading(3, "Overall Results");
    md.table(
        &["Metric", "Value"],
        &[
            vec!["**Total Tests**".to_string(), total_tests.to_string()],
            vec!["**Passed**".to_string(), total_passed.to_string()],
            vec!["**Failed**".to_string(), total_failures.to_string()],
            vec!["**Errors**".to_string(), total_errors.to_string()],
            vec!["**Success Rate**".to_string(), format!("{:.1}%", success_rate)],
            vec!["**Total Duration**".to_string(), format_duration(total_time)],
        ],
    );

    let suites = arr_at(data, &["testsuites", "testsuite"]);
    if suites.is_empty() {
        md.placeholder("test suites");
    }
    for suite in suites {
        add_suite(&mut md, suite);
    }

    md.rule();
    md.line(format!("*Report generated on {}*", timestamp()));
    md.into_string()
}

fn add_suite(md: &mut Markdown, suite: &Value) {
    let tests = i64_at(suite, &["tests"], 0);
    let failures = i64_at(suite, &["failures"], 0);
    let errors = i64_at(suite, &["errors"], 0);

    md.heading(2, &format!("Test Suite: {}", str_at(suite, &["name"], "Unknown")));
    md.bold_field("Duration", &format_duration(f64_at(suite, &["time"], 0.0)));
    md.line(format!(
        "**Tests:** {} | **Passed:** {} | **Failed:** {} | **Errors:** {}",
        tests,
        tests - failures - errors,
        failures,
        errors
    ));
    md.blank();

    md.heading(3, "Test Results");
    let cases = arr_at(suite, &["testcase"]);
    if cases.is_empty() {
        md.placeholder("test cases");
        return;
    }
    let rows: Vec<Vec<String>> = cases
        .iter()
        .map(|case| {
            vec![
                str_at(case, &["name"], "Unknown").to_string(),
                format!("`{}`", str_at(case, &["classname"], "Unknown")),
                format_duration(f64_at(case, &["time"], 0.0)),
                str_at(case, &["status"], "unknown").to_uppercase(),
            ]
        })
        .collect();
    md.table(&["Test Case", "Class", "Duration", "Status"], &rows);

    // Failure/error details after the table, one block per bad case
    for case in cases {
        let name = str_at(case, &["name"], "Unknown");
        match str_at(case, &["status"], "unknown") {
            "failed" => add_outcome_detail(md, "Failure Details", name, case, "failure"),
            "error" => add_outcome_detail(md, "Error Details", name, case, "error"),
            _ => {}
        }
    }
}

fn add_outcome_detail(md: &mut Markdown, title: &str, name: &str, case: &Value, key: &str) {
    md.heading(3, &format!("{}: {}", title, name));
    md.line("```");
    md.line(format!("Type: {}", str_at(case, &[key, "type"], "Unknown")));
    md.line(format!("Message: {}", str_at(case, &[key, "message"], "No message")));
    md.line(str_at(case, &[key, "text"], "No details"));
    md.line("```");
    md.blank();
}

/// Human duration: "1.500s", "2m 30.000s", "1h 2m 3.000s".
pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{:.3}s", seconds)
    } else if seconds < 3600.0 {
        let minutes = (seconds / 60.0) as u64;
        format!("{}m {:.3}s", minutes, seconds % 60.0)
    } else {
        let hours = (seconds / 3600.0) as u64;
        let minutes = ((seconds % 3600.0) / 60.0) as u64;
        format!("{}h {}m {:.3}s", hours, minutes, seconds % 60.0)
    }
}

/// `testReport` summary schema to a Markdown digest.
pub fn render_summary(data: &Value) -> String {
    let total_tests = i64_at(data, &["testReport", "summary", "totalTests"], 0);
    let total_failures = i64_at(data, &["testReport", "summary", "totalFailures"], 0);
    let total_errors = i64_at(data, &["testReport", "summary", "totalErrors"], 0);
    let total_skipped = i64_at(data, &["testReport", "summary", "totalSkipped"], 0);
    let success_rate = f64_at(data, &["testReport", "summary", "successRate"], 0.0);
    let total_time = display_at(data, &["testReport", "summary", "totalTime"], "0");
    let generated = display_at(data, &["testReport", "summary", "timestamp"], &timestamp());
    let passed = total_tests - total_failures - total_errors;

    let mut md = Markdown::new();
    md.heading(1, "JUnit Test Results Report");
    md.bold_field("Generated", &format!("`{}`", generated));
    md.bold_field("Total Tests", &format!("`{}`", total_tests));
    md.bold_field("Total Failures", &format!("`{}`", total_failures));
    md.bold_field("Total Errors", &format!("`{}`", total_errors));
    md.bold_field("Total Skipped", &format!("`{}`", total_skipped));
    md.bold_field("Success Rate", &format!("`{}%`", success_rate));
    md.bold_field("Total Execution Time", &format!("`{}s`", total_time));
    md.rule();

    md.heading(2, "Test Summary");
    md.table(
        &["Metric", "Count"],
        &[
            vec!["Total Tests".to_string(), total_tests.to_string()],
            vec!["Passed".to_string(), passed.to_string()],
            vec!["Failed".to_string(), total_failures.to_string()],
            vec!["Errors".to_string(), total_errors.to_string()],
            vec!["Skipped".to_string(), total_skipped.to_string()],
            vec!["Success Rate".to_string(), format!("{}%", success_rate)],
        ],
    );
    md.rule();

    md.heading(2, "Test Results by Class");
    let tests = arr_at(data, &["testReport", "testSuites"]);
    if tests.is_empty() {
        md.placeholder("tests");
    }
    for (class_name, class_tests) in group_by_class(tests) {
        md.heading(3, &class_name);
        let rows: Vec<Vec<String>> = class_tests
            .iter()
            .map(|test| {
                let status = str_at(test, &["status"], "unknown");
                vec![
                    str_at(test, &["name"], "Unknown").to_string(),
                    format!("{} {}", status_marker(status), status),
                    format!("{}s", display_at(test, &["time"], "0")),
                ]
            })
            .collect();
        md.table(&["Test Name", "Status", "Execution Time"], &rows);
    }

    md.rule();
    md.heading(2, "Overall Status");
    md.line(overall_status(success_rate));
    md.blank();
    md.line("**Recommendations:**");

    if total_failures > 0 || total_errors > 0 {
        md.bullet(&format!(
            "Review and fix {} failing tests",
            total_failures + total_errors
        ));
        md.bullet("Investigate test failures in the affected classes");
        md.bullet("Consider adding more test coverage for failing scenarios");
    }
    if total_skipped > 0 {
        md.bullet(&format!(
            "Review {} skipped tests to ensure they are intentionally skipped",
            total_skipped
        ));
        md.bullet("Consider enabling skipped tests if conditions are met");
    }
    if success_rate == 100.0 {
        md.bullet("All tests are passing! Consider adding more test coverage for edge cases");
        md.bullet("Review test execution time for optimization opportunities");
    }

    md.blank();
    md.rule();
    md.into_string()
}

/// Group tests by their `class` field, preserving first-seen order.
fn group_by_class(tests: &[Value]) -> Vec<(String, Vec<&Value>)> {
    let mut groups: Vec<(String, Vec<&Value>)> = Vec::new();
    for test in tests {
        let class_name = str_at(test, &["class"], "Unknown").to_string();
        match groups.iter_mut().find(|(name, _)| *name == class_name) {
            Some((_, members)) => members.push(test),
            None => groups.push((class_name, vec![test])),
        }
    }
    groups
}

fn overall_status(success_rate: f64) -> &'static str {
    if success_rate == 100.0 {
        "All tests passed successfully!"
    } else if success_rate >= 80.0 {
        "Most tests passed with some failures."
    } else {
        "Significant test failures detected."
    }
}
