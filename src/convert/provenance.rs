//! SLSA provenance to Markdown
//!
//! Two document shapes: the full in-toto statement (subject plus
//! predicate) and the bare v1 predicate some CI systems attest
//! separately. All values render backticked so hashes and URIs survive
//! Markdown rendering intact.

use serde_json::Value;

use crate::report::access::{arr_at, display_at, pluck, str_at};
use crate::report::markdown::Markdown;

/// sha1/sha256 digest pairs as a single cell, empty when neither is set.
fn format_digests(digests: Option<&Value>) -> String {
    let Some(digests) = digests else {
        return String::new();
    };
    let mut parts = Vec::new();
    if let Some(sha1) = digests.get("sha1").and_then(Value::as_str) {
        parts.push(format!("sha1: `{}`", sha1));
    }
    if let Some(sha256) = digests.get("sha256").and_then(Value::as_str) {
        parts.push(format!("sha256: `{}`", sha256));
    }
    parts.join(", ")
}

pub fn render_statement(data: &Value) -> String {
    let mut md = Markdown::new();
    md.heading(1, "SLSA Provenance Statement");
    md.bold_field("Statement Type", &format!("`{}`", str_at(data, &["_type"], "N/A")));
    md.bold_field("Predicate Type", &format!("`{}`", str_at(data, &["predicateType"], "N/A")));

    md.heading(2, "Subject");
    let subjects = arr_at(data, &["subject"]);
    if subjects.is_empty() {
        md.placeholder("subjects");
    }
    for subject in subjects {
        md.key_value("Name", &format!("`{}`", str_at(subject, &["name"], "N/A")));
        md.key_value("Digests", &format_digests(pluck(subject, &["digest"])));
        md.blank();
    }

    let predicate = pluck(data, &["predicate"]);
    md.heading(2, "Predicate");

    md.heading(3, "Build Type");
    md.line(format!(
        "`{}`",
        predicate.map(|p| str_at(p, &["buildType"], "N/A")).unwrap_or("N/A")
    ));
    md.blank();

    md.heading(3, "Builder");
    md.key_value(
        "ID",
        &format!(
            "`{}`",
            predicate.map(|p| str_at(p, &["builder", "id"], "N/A")).unwrap_or("N/A")
        ),
    );
    md.blank();

    if let Some(invocation) = predicate.and_then(|p| pluck(p, &["invocation"])) {
        add_invocation(&mut md, invocation);
    }
    if let Some(metadata) = predicate.and_then(|p| pluck(p, &["metadata"])) {
        add_metadata(&mut md, metadata);
    }

    let materials = predicate.map(|p| arr_at(p, &["materials"])).unwrap_or(&[]);
    if !materials.is_empty() {
        md.heading(3, "Materials");
        for material in materials {
            md.key_value("URI", &format!("`{}`", str_at(material, &["uri"], "N/A")));
            md.key_value("Digests", &format_digests(pluck(material, &["digest"])));
            md.blank();
        }
    }
    md.into_string()
}

fn add_invocation(md: &mut Markdown, invocation: &Value) {
    md.heading(3, "Invocation");

    md.heading(4, "Config Source");
    md.key_value(
        "URI",
        &format!("`{}`", str_at(invocation, &["configSource", "uri"], "N/A")),
    );
    md.key_value(
        "Entry Point",
        &format!("`{}`", str_at(invocation, &["configSource", "entryPoint"], "N/A")),
    );
    md.key_value(
        "Digests",
        &format_digests(pluck(invocation, &["configSource", "digest"])),
    );
    md.blank();

    if let Some(environment) = pluck(invocation, &["environment"]) {
        md.heading(4, "Environment");
        md.key_value(
            "Build URL",
            &format!("`{}`", str_at(environment, &["build_url"], "N/A")),
        );
        md.key_value("Job URL", &format!("`{}`", str_at(environment, &["job_url"], "N/A")));
        md.key_value(
            "Node Name",
            &format!("`{}`", str_at(environment, &["node_name"], "N/A")),
        );
        md.blank();
    }
}

fn add_metadata(md: &mut Markdown, metadata: &Value) {
    md.heading(3, "Metadata");
    md.key_value(
        "Build Invocation ID",
        &format!("`{}`", str_at(metadata, &["buildInvocationId"], "N/A")),
    );
    md.key_value("Started On", &format!("`{}`", str_at(metadata, &["buildStartedOn"], "N/A")));
    md.key_value(
        "Finished On",
        &format!("`{}`", str_at(metadata, &["buildFinishedOn"], "N/A")),
    );
    md.key_value(
        "Reproducible",
        &format!("`{}`", display_at(metadata, &["reproducible"], "N/A")),
    );
    md.blank();

    if let Some(completeness) = pluck(metadata, &["completeness"]) {
        md.heading(4, "Completeness");
        md.key_value(
            "Parameters",
            &format!("`{}`", display_at(completeness, &["parameters"], "N/A")),
        );
        md.key_value(
            "Environment",
            &format!("`{}`", display_at(completeness, &["environment"], "N/A")),
        );
        md.key_value(
            "Materials",
            &format!("`{}`", display_at(completeness, &["materials"], "N/A")),
        );
        md.blank();
    }
}

pub fn render_predicate(data: &Value) -> String {
    let mut md = Markdown::new();
    md.heading(1, "SLSA Provenance Predicate");

    let predicate = pluck_or_self(data);
    md.heading(2, "Predicate");

    md.heading(3, "Build Definition");
    md.key_value(
        "Build Type",
        &format!("`{}`", str_at(predicate, &["buildDefinition", "buildType"], "N/A")),
    );
    md.blank();

    md.heading(4, "External Parameters");
    let external = pluck(predicate, &["buildDefinition", "externalParameters"]);
    md.key_value(
        "Entry Point",
        &format!(
            "`{}`",
            external.map(|e| str_at(e, &["entryPoint"], "N/A")).unwrap_or("N/A")
        ),
    );
    md.key_value(
        "Source",
        &format!(
            "`{}`",
            external.map(|e| str_at(e, &["source"], "N/A")).unwrap_or("N/A")
        ),
    );
    md.blank();

    if let Some(internal) =
        pluck(predicate, &["buildDefinition", "internalParameters"]).and_then(Value::as_object)
    {
        md.heading(4, "Internal Parameters");
        for (key, value) in internal {
            md.key_value(key, &format!("`{}`", crate::report::access::display(value)));
        }
        md.blank();
    }

    let dependencies = arr_at(predicate, &["buildDefinition", "resolvedDependencies"]);
    if !dependencies.is_empty() {
        md.heading(4, "Resolved Dependencies");
        for dep in dependencies {
            md.key_value("URI", &format!("`{}`", str_at(dep, &["uri"], "N/A")));
            md.key_value("Digest", &format_digests(pluck(dep, &["digest"])));
            md.blank();
        }
    }

    md.heading(3, "Run Details");
    md.key_value(
        "Builder ID",
        &format!("`{}`", str_at(predicate, &["runDetails", "builder", "id"], "N/A")),
    );
    if let Some(versions) =
        pluck(predicate, &["runDetails", "builder", "version"]).and_then(Value::as_object)
    {
        for (component, version) in versions {
            md.key_value(
                &format!("{} Version", component),
                &format!("`{}`", crate::report::access::display(version)),
            );
        }
    }
    md.blank();

    md.heading(4, "Metadata");
    md.key_value(
        "Invocation ID",
        &format!("`{}`", str_at(predicate, &["runDetails", "metadata", "invocationID"], "N/A")),
    );
    md.key_value(
        "Started On",
        &format!("`{}`", str_at(predicate, &["runDetails", "metadata", "startedOn"], "N/A")),
    );
    md.key_value(
        "Finished On",
        &format!("`{}`", str_at(predicate, &["runDetails", "metadata", "finishedOn"], "N/A")),
    );
    md.blank();
    md.into_string()
}

/// Some CI systems wrap the predicate in a `predicate` key even in the
/// bare-predicate file; unwrap it when present.
fn pluck_or_self(data: &Value) -> &Value {
    pluck(data, &["predicate"]).unwrap_or(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn digests_join_sha1_and_sha256() {
        let digests = json!({"sha1": "abc", "sha256": "def"});
        assert_eq!(format_digests(Some(&digests)), "sha1: `abc`, sha256: `def`");
        assert_eq!(format_digests(Some(&json!({"sha256": "def"}))), "sha256: `def`");
        assert_eq!(format_digests(None), "");
    }

    #[test]
    fn statement_renders_subject_and_builder() {
        let data = json!({
            "_type": "https://in-toto.io/Statement/v0.1",
            "predicateType": "https://slsa.dev/provenance/v0.2",
            "subject": [{"name": "app.jar", "digest": {"sha256": "deadbeef"}}],
            "predicate": {
                "buildType": "https://jenkins.io/buildtype",
                "builder": {"id": "https://jenkins.example/"},
                "invocation": {
                    "configSource": {"uri": "git+https://git.example/repo", "entryPoint": "Jenkinsfile"},
                    "environment": {"build_url": "https://jenkins.example/42/"}
                },
                "metadata": {
                    "buildInvocationId": "42",
                    "reproducible": false,
                    "completeness": {"parameters": true, "environment": false, "materials": false}
                },
                "materials": [{"uri": "git+https://git.example/repo", "digest": {"sha1": "cafe"}}]
            }
        });
        let text = render_statement(&data);
        assert!(text.contains("**Predicate Type:** `https://slsa.dev/provenance/v0.2`"));
        assert!(text.contains("- **Name:** `app.jar`"));
        assert!(text.contains("- **Digests:** sha256: `deadbeef`"));
        assert!(text.contains("- **ID:** `https://jenkins.example/`"));
        assert!(text.contains("- **Build URL:** `https://jenkins.example/42/`"));
        assert!(text.contains("- **Parameters:** `true`"));
        assert!(text.contains("- **Digests:** sha1: `cafe`"));
    }

    #[test]
    fn statement_without_subject_renders_placeholder() {
        let text = render_statement(&json!({}));
        assert!(text.contains("No subjects found."));
        assert!(text.contains("**Statement Type:** `N/A`"));
    }

    #[test]
    fn predicate_renders_build_definition_and_run_details() {
        let data = json!({"predicate": {
            "buildDefinition": {
                "buildType": "https://gitlab.com/buildtype",
                "externalParameters": {"entryPoint": ".gitlab-ci.yml", "source": "https://git.example/repo"},
                "internalParameters": {"architecture": "amd64", "job": "build"},
                "resolvedDependencies": [{"uri": "https://git.example/repo", "digest": {"sha256": "f00d"}}]
            },
            "runDetails": {
                "builder": {"id": "https://gitlab.example/runner", "version": {"gitlab-runner": "16.9"}},
                "metadata": {"invocationID": "7001", "startedOn": "2024-01-01T00:00:00Z"}
            }
        }});
        let text = render_predicate(&data);
        assert!(text.contains("- **Build Type:** `https://gitlab.com/buildtype`"));
        assert!(text.contains("- **Entry Point:** `.gitlab-ci.yml`"));
        assert!(text.contains("- **architecture:** `amd64`"));
        assert!(text.contains("- **Digest:** sha256: `f00d`"));
        assert!(text.contains("- **gitlab-runner Version:** `16.9`"));
        assert!(text.contains("- **Invocation ID:** `7001`"));
    }

    #[test]
    fn bare_predicate_without_wrapper_key_still_renders() {
        let data = json!({"buildDefinition": {"buildType": "bt"}});
        let text = render_predicate(&data);
        assert!(text.contains("- **Build Type:** `bt`"));
    }
}
