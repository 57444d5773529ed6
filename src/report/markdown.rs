//! Markdown fragment assembly
//!
//! An append-only line buffer with helpers for the handful of shapes the
//! converters emit: headings, bold key/value fields, bullet lists, and
//! pipe tables. Table cells are escaped here so no converter can corrupt
//! the column structure.

use chrono::Utc;

/// Append-only Markdown document builder.
#[derive(Default)]
pub struct Markdown {
    lines: Vec<String>,
}

impl Markdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// `## text` style heading followed by a blank line.
    pub fn heading(&mut self, level: usize, text: &str) {
        self.lines.push(format!("{} {}", "#".repeat(level), text));
        self.lines.push(String::new());
    }

    /// Raw line, verbatim.
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn bullet(&mut self, text: &str) {
        self.lines.push(format!("- {}", text));
    }

    /// `- **Key:** value` bullet.
    pub fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("- **{}:** {}", key, value));
    }

    /// Standalone `**Key:** value` paragraph.
    pub fn bold_field(&mut self, key: &str, value: &str) {
        self.lines.push(format!("**{}:** {}", key, value));
        self.lines.push(String::new());
    }

    /// Horizontal rule.
    pub fn rule(&mut self) {
        self.lines.push("---".to_string());
        self.lines.push(String::new());
    }

    /// Pipe table. Every cell is escaped; rows must match the header width
    /// by construction at the call site.
    pub fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        self.lines.push(format!("| {} |", headers.join(" | ")));
        self.lines.push(format!(
            "|{}|",
            headers.iter().map(|_| "---").collect::<Vec<_>>().join("|")
        ));
        for row in rows {
            let cells: Vec<String> = row.iter().map(|cell| escape_cell(cell)).collect();
            self.lines.push(format!("| {} |", cells.join(" | ")));
        }
        self.lines.push(String::new());
    }

    /// "No X found." line for empty collections, instead of an empty table.
    pub fn placeholder(&mut self, what: &str) {
        self.lines.push(format!("No {} found.", what));
        self.lines.push(String::new());
    }

    pub fn into_string(self) -> String {
        let mut text = self.lines.join("\n");
        while text.ends_with('\n') {
            text.pop();
        }
        text.push('\n');
        text
    }
}

/// Escape a table cell: `|` would split the column, newlines would split
/// the row.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}

/// Truncate to `budget` characters, appending `...` when over.
pub fn truncate(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let cut: String = text.chars().take(budget).collect();
    format!("{}...", cut)
}

/// UTC timestamp in the `2024-01-31 12:00:00 UTC` form all reports use.
pub fn timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_escapes_pipes_and_newlines() {
        let mut md = Markdown::new();
        md.table(
            &["Name", "Value"],
            &[vec!["a|b".to_string(), "line1\nline2".to_string()]],
        );
        let text = md.into_string();
        assert!(text.contains("| a\\|b | line1<br>line2 |"));
        // Escaped pipe must not change the column count
        let row = text.lines().nth(2).unwrap();
        assert_eq!(row.matches(" | ").count(), 1);
    }

    #[test]
    fn truncate_appends_ellipsis_past_budget() {
        let long = "x".repeat(120);
        let cut = truncate(&long, 100);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate("short", 100), "short");
        assert_eq!(truncate(&"x".repeat(100), 100).len(), 100);
    }

    #[test]
    fn placeholder_renders_no_items_line() {
        let mut md = Markdown::new();
        md.placeholder("packages");
        assert!(md.into_string().starts_with("No packages found."));
    }

    #[test]
    fn heading_and_fields_round_trip() {
        let mut md = Markdown::new();
        md.heading(1, "Title");
        md.bold_field("Key", "value");
        md.key_value("Nested", "v");
        let text = md.into_string();
        assert!(text.starts_with("# Title\n"));
        assert!(text.contains("**Key:** value"));
        assert!(text.contains("- **Nested:** v"));
    }
}
