//! Integration tests for the mdreport CLI
//!
//! Each test drives the binary end to end: write an input report into a
//! temp directory, run a subcommand, and assert on the Markdown it wrote.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mdreport() -> Command {
    Command::cargo_bin("mdreport").expect("binary should build")
}

#[test]
fn test_help_command() {
    mdreport()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert scanner and test reports"));
}

#[test]
fn test_version_command() {
    mdreport()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mdreport"));
}

#[test]
fn test_no_command_shows_help() {
    mdreport()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_sarif_detailed_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("scan.sarif");
    std::fs::write(
        &input,
        r#"{
          "runs": [{
            "tool": {"driver": {"name": "TestTool", "rules": [{"id": "R1"}]}},
            "results": [{"ruleId": "R1", "message": {"text": "Example"}}]
          }]
        }"#,
    )
    .unwrap();

    let output = dir.path().join("scan.md");
    mdreport()
        .arg("sarif")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--detailed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Markdown report saved to"));

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.contains("Static Analysis Security Report"));
    assert!(report.contains("TestTool"));
    // A result with no level falls back to the neutral marker
    assert!(report.contains("| ⚪ None | R1 | N/A | Example |"));
}

#[test]
fn test_sarif_summary_lists_results_per_run() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("scan.sarif");
    std::fs::write(
        &input,
        r#"{"runs": [{
            "tool": {"driver": {"name": "Semgrep", "version": "1.50.0"}},
            "results": [{"ruleId": "py.flask.debug", "message": {"text": "Debug enabled"}}]
        }]}"#,
    )
    .unwrap();

    let output = dir.path().join("summary.md");
    mdreport()
        .arg("sarif")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.contains("Tool: Semgrep (Version: 1.50.0)"));
    assert!(report.contains("| py.flask.debug | Debug enabled |"));
}

#[test]
fn test_missing_input_fails_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("never.md");
    mdreport()
        .arg("sarif")
        .arg(dir.path().join("absent.sarif"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.sarif"));
    assert!(!output.exists());
}

#[test]
fn test_spdx_pipe_escaping_in_table_cells() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("sbom.json");
    std::fs::write(
        &input,
        r#"{
          "name": "demo",
          "packages": [{"name": "weird|name", "versionInfo": "1.0.0"}]
        }"#,
    )
    .unwrap();

    let output = dir.path().join("sbom.md");
    mdreport()
        .arg("sbom")
        .arg("spdx")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.contains("weird\\|name"));
}

#[test]
fn test_junit_convert_then_report() {
    let dir = TempDir::new().unwrap();
    let xml = dir.path().join("results.xml");
    std::fs::write(
        &xml,
        r#"<testsuites name="all" tests="2" failures="1" errors="0" skipped="0" time="0.8">
  <testsuite name="unit" tests="2" failures="1" errors="0" skipped="0" time="0.8">
    <testcase name="works" classname="demo.T" time="0.3"/>
    <testcase name="breaks" classname="demo.T" time="0.5">
      <failure message="boom" type="AssertionError">trace</failure>
    </testcase>
  </testsuite>
</testsuites>"#,
    )
    .unwrap();

    let json = dir.path().join("results.json");
    mdreport()
        .arg("junit")
        .arg("convert")
        .arg(&xml)
        .arg("-o")
        .arg(&json)
        .assert()
        .success();

    let report_path = dir.path().join("report.md");
    mdreport()
        .arg("junit")
        .arg("report")
        .arg(&json)
        .arg("-o")
        .arg(&report_path)
        .assert()
        .success();

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("# JUnit Test Execution Report"));
    assert!(report.contains("| **Passed** | 1 |"));
    assert!(report.contains("Failure Details: breaks"));
}

#[test]
fn test_junit_summary_passed_count() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("summary.json");
    std::fs::write(
        &input,
        r#"{"testReport": {"summary": {
            "totalTests": 10, "totalFailures": 2, "totalErrors": 1,
            "totalSkipped": 0, "successRate": 70, "totalTime": 3.2
        }}}"#,
    )
    .unwrap();

    let output = dir.path().join("digest.md");
    mdreport()
        .arg("junit")
        .arg("summary")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.contains("| Passed | 7 |"));
    assert!(report.contains("Significant test failures detected."));
}

#[test]
fn test_trufflehog_report_skips_chatter_records() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("findings.jsonl");
    std::fs::write(
        &input,
        concat!(
            "{\"msg\": \"scan started\"}\n",
            "{\"SourceName\": \"fs\", \"DetectorName\": \"AWS\", \"Verified\": true}\n",
        ),
    )
    .unwrap();

    let output = dir.path().join("findings.md");
    mdreport()
        .arg("trufflehog")
        .arg("report")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let report = std::fs::read_to_string(&output).unwrap();
    assert_eq!(report.matches("## Report Overview").count(), 1);
    assert!(report.contains("**Detector Name:** `AWS`"));
}

#[test]
fn test_trufflehog_aggregate_wraps_records() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("findings.jsonl");
    std::fs::write(&input, "{\"DetectorName\": \"Github\"}\n").unwrap();

    let output = dir.path().join("findings.json");
    mdreport()
        .arg("trufflehog")
        .arg("aggregate")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let bundled: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(bundled["data"][0]["DetectorName"], "Github");
}

#[test]
fn test_depcheck_truncates_long_descriptions() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("scan.json");
    let long = "d".repeat(150);
    std::fs::write(
        &input,
        format!(
            r#"{{"dependencies": [{{
                "fileName": "lib.jar",
                "vulnerabilities": [{{
                    "name": "CVE-2024-0001",
                    "severity": "HIGH",
                    "description": "{long}"
                }}]
            }}]}}"#
        ),
    )
    .unwrap();

    let output = dir.path().join("scan-report.md");
    mdreport()
        .arg("depcheck")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let report = std::fs::read_to_string(&output).unwrap();
    let expected = format!("{}...", "d".repeat(100));
    assert!(report.contains(&expected));
    assert!(!report.contains(&"d".repeat(101)));
}

#[test]
fn test_depcheck_derives_output_from_input_name() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("dependency-check-report.json");
    std::fs::write(&input, "{}").unwrap();

    mdreport().arg("depcheck").arg(&input).assert().success();

    assert!(dir.path().join("dependency-check-report.md").exists());
}

#[test]
fn test_blazemeter_requires_artifact_and_test_id() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("aggregate.json");
    std::fs::write(&input, r#"{"result": []}"#).unwrap();

    mdreport().arg("blazemeter").arg(&input).assert().failure();

    let output = dir.path().join("perf.md");
    mdreport()
        .arg("blazemeter")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--artifact")
        .arg("build-7")
        .arg("--test-id")
        .arg("t-99")
        .assert()
        .success();

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.contains("**Artifact Name:** build-7"));
    assert!(report.contains("No Performance Summary Data Found"));
}

#[test]
fn test_tfsec_empty_results_placeholder() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("tfsec.json");
    std::fs::write(&input, r#"{"results": []}"#).unwrap();

    let output = dir.path().join("tfsec.md");
    mdreport()
        .arg("tfsec")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.contains("No issues found."));
}

#[test]
fn test_provenance_statement_renders_subject() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("provenance.json");
    std::fs::write(
        &input,
        r#"{
          "_type": "https://in-toto.io/Statement/v0.1",
          "predicateType": "https://slsa.dev/provenance/v0.2",
          "subject": [{"name": "app.jar", "digest": {"sha256": "deadbeef"}}],
          "predicate": {"builder": {"id": "https://ci.example/"}}
        }"#,
    )
    .unwrap();

    let output = dir.path().join("provenance.md");
    mdreport()
        .arg("provenance")
        .arg("statement")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.contains("# SLSA Provenance Statement"));
    assert!(report.contains("- **Name:** `app.jar`"));
    assert!(report.contains("sha256: `deadbeef`"));
}

#[test]
fn test_invalid_json_input_is_a_clean_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.json");
    std::fs::write(&input, "{not json").unwrap();

    mdreport()
        .arg("dive")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON"));
}
