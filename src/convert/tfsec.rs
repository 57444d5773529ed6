//! tfsec results to Markdown
//!
//! One section per detected issue: impact, reference links, the offending
//! location, then the rule details as a bullet list.

use serde_json::Value;

use crate::report::access::{arr_at, display_at, str_at};
use crate::report::markdown::Markdown;

pub fn render(data: &Value) -> String {
    let mut md = Markdown::new();
    md.heading(1, "Detected Vulnerabilities by tfsec");

    let results = arr_at(data, &["results"]);
    if results.is_empty() {
        md.placeholder("issues");
        return md.into_string();
    }

    for result in results {
        md.heading(2, &format!("Issue: {}", str_at(result, &["description"], "No description")));

        md.heading(3, "Impact");
        md.line(str_at(result, &["impact"], "No impact information"));
        md.blank();

        md.heading(3, "Links");
        let links = arr_at(result, &["links"]);
        if links.is_empty() {
            md.line("No links available.");
        } else {
            for link in links.iter().filter_map(Value::as_str) {
                md.bullet(&format!("[{}]({})", link, link));
            }
        }
        md.blank();

        md.heading(3, "Location");
        md.key_value("File", str_at(result, &["location", "filename"], "Unknown file"));
        md.key_value(
            "Start Line",
            &display_at(result, &["location", "start_line"], "Unknown start line"),
        );
        md.key_value(
            "End Line",
            &display_at(result, &["location", "end_line"], "Unknown end line"),
        );
        md.blank();

        md.heading(3, "Details");
        md.key_value("Long ID", &format!("`{}`", str_at(result, &["long_id"], "Unknown long ID")));
        md.key_value("Resolution", str_at(result, &["resolution"], "No resolution provided"));
        md.key_value("Resource", &format!("`{}`", str_at(result, &["resource"], "Unknown resource")));
        md.key_value(
            "Rule Description",
            str_at(result, &["rule_description"], "No rule description"),
        );
        md.key_value("Rule ID", &format!("`{}`", str_at(result, &["rule_id"], "Unknown rule ID")));
        md.key_value(
            "Rule Provider",
            &format!("`{}`", str_at(result, &["rule_provider"], "Unknown rule provider")),
        );
        md.key_value(
            "Rule Service",
            &format!("`{}`", str_at(result, &["rule_service"], "Unknown rule service")),
        );
        md.key_value("Severity", &format!("`{}`", str_at(result, &["severity"], "Unknown severity")));
        md.key_value("Status", &format!("`{}`", display_at(result, &["status"], "Unknown status")));
        md.key_value("Warning", &format!("`{}`", display_at(result, &["warning"], "Unknown warning")));
        md.blank();
    }
    md.into_string()
}
