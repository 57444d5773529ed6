//! Dive image analysis to Markdown

use serde_json::Value;

use crate::report::access::{arr_at, display_at};
use crate::report::markdown::Markdown;

pub fn render(data: &Value) -> String {
    let mut md = Markdown::new();
    md.heading(2, "Dive Analysis Report");
    md.bold_field(
        "Image Size",
        &format!("`{} bytes`", display_at(data, &["image", "sizeBytes"], "N/A")),
    );
    md.bold_field(
        "Inefficient Bytes",
        &format!("`{} bytes`", display_at(data, &["image", "inefficientBytes"], "N/A")),
    );
    md.bold_field(
        "Efficiency Score",
        &format!("`{}`", display_at(data, &["image", "efficiencyScore"], "N/A")),
    );
    md.rule();

    md.heading(3, "File References");
    md.line("This section lists the files contributing to inefficiencies in the image.");
    md.blank();

    let references = arr_at(data, &["image", "fileReference"]);
    if references.is_empty() {
        md.placeholder("file references");
    } else {
        let rows: Vec<Vec<String>> = references
            .iter()
            .map(|file_ref| {
                vec![
                    display_at(file_ref, &["file"], "N/A"),
                    display_at(file_ref, &["count"], "N/A"),
                    display_at(file_ref, &["sizeBytes"], "N/A"),
                ]
            })
            .collect();
        md.table(&["File Path", "Count", "Size (Bytes)"], &rows);
    }
    md.rule();
    md.into_string()
}
