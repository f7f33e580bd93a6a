use anyhow::{Context, Result};

use super::IssueReport;

const FILE_WIDTH: usize = 20;

/// Two-column text report: the file's first line next to its name, the rest
/// indented beneath it.
pub fn render_table(report: &IssueReport) -> String {
    let mut out = format!("{:<w$} | Status/Issues\n", "File Name", w = FILE_WIDTH);
    out.push_str(&format!("{:-<60}\n", ""));
    for entry in report.entries() {
        let file = entry.file.display().to_string();
        let mut lines = entry.issues.iter();
        let first = lines.next().map(String::as_str).unwrap_or_default();
        out.push_str(&format!("{:<w$} | {}\n", file, first, w = FILE_WIDTH));
        for line in lines {
            out.push_str(&format!("{:<w$} | {}\n", "", line, w = FILE_WIDTH));
        }
    }
    out
}

/// Pretty JSON array of `{ "file", "issues" }` objects.
pub fn render_json(report: &IssueReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serializing report")
}
