//! SBOM to Markdown
//!
//! SPDX and CycloneDX documents share the same summary shape: document
//! metadata up top, then component tables. The SPDX `supplier` field may be
//! a plain string or a map with a `name`, so both are tolerated.

use serde_json::Value;

use crate::report::access::{arr_at, display, pluck, str_at};
use crate::report::markdown::Markdown;

pub fn render_spdx(data: &Value) -> String {
    let mut md = Markdown::new();
    md.heading(1, "SBOM Summary");
    md.bold_field("SPDX Version", str_at(data, &["spdxVersion"], "N/A"));
    md.bold_field("Data License", str_at(data, &["dataLicense"], "N/A"));
    md.bold_field("Document Namespace", str_at(data, &["documentNamespace"], "N/A"));

    md.heading(2, "Creation Info");
    md.key_value(
        "License List Version",
        str_at(data, &["creationInfo", "licenseListVersion"], "N/A"),
    );
    md.key_value("Created", str_at(data, &["creationInfo", "created"], "N/A"));
    let creators = arr_at(data, &["creationInfo", "creators"]);
    if creators.is_empty() {
        md.bullet("No creators found.");
    } else {
        md.bullet("Creators:");
        for creator in creators {
            md.line(format!("  - {}", display(creator)));
        }
    }
    md.blank();

    md.heading(2, "Packages");
    let packages = arr_at(data, &["packages"]);
    if packages.is_empty() {
        md.placeholder("packages");
    } else {
        let rows: Vec<Vec<String>> = packages
            .iter()
            .enumerate()
            .map(|(idx, package)| {
                vec![
                    (idx + 1).to_string(),
                    str_at(package, &["name"], "N/A").to_string(),
                    str_at(package, &["versionInfo"], "N/A").to_string(),
                    supplier_name(package),
                ]
            })
            .collect();
        md.table(&["Index", "Name", "Version", "Supplier"], &rows);
    }
    md.into_string()
}

fn supplier_name(package: &Value) -> String {
    match pluck(package, &["supplier"]) {
        Some(Value::Object(_)) => str_at(package, &["supplier", "name"], "N/A").to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => "N/A".to_string(),
    }
}

pub fn render_cyclonedx(data: &Value) -> String {
    let mut md = Markdown::new();
    md.heading(1, "SBOM Summary");
    md.bold_field(
        "Component Name",
        str_at(data, &["metadata", "component", "name"], "N/A"),
    );
    md.bold_field("Timestamp", str_at(data, &["metadata", "timestamp"], "N/A"));

    md.heading(2, "Tools Used");
    let tools = arr_at(data, &["metadata", "tools", "components"]);
    if tools.is_empty() {
        md.line("No tool information found.");
    } else {
        for tool in tools {
            md.bullet(&format!(
                "{} (version: {})",
                str_at(tool, &["name"], "Unknown Tool"),
                str_at(tool, &["version"], "Unknown Version")
            ));
        }
    }
    md.blank();

    md.heading(2, "Components");
    let components = arr_at(data, &["components"]);
    if components.is_empty() {
        md.placeholder("components");
    } else {
        let rows: Vec<Vec<String>> = components
            .iter()
            .map(|comp| {
                vec![
                    str_at(comp, &["bom-ref"], "N/A").to_string(),
                    str_at(comp, &["name"], "N/A").to_string(),
                    str_at(comp, &["version"], "N/A").to_string(),
                ]
            })
            .collect();
        md.table(&["bom-ref", "name", "version"], &rows);
    }

    md.heading(2, "Dependencies");
    let dependencies = arr_at(data, &["dependencies"]);
    if dependencies.is_empty() {
        md.placeholder("dependencies");
    } else {
        let rows: Vec<Vec<String>> = dependencies
            .iter()
            .map(|dep| {
                let depends_on: Vec<&str> = arr_at(dep, &["dependsOn"])
                    .iter()
                    .filter_map(Value::as_str)
                    .collect();
                vec![
                    str_at(dep, &["ref"], "N/A").to_string(),
                    depends_on.join(", "),
                ]
            })
            .collect();
        md.table(&["Reference", "DependsOn"], &rows);
    }
    md.into_string()
}
