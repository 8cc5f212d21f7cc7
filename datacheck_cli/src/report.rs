//! Self-contained HTML report writer.
//!
//! Produces a single HTML file with inline CSS and no external dependencies,
//! so the file renders correctly when opened directly from the evidence
//! directory.

use chrono::Local;
use datacheck_core::ValidationReport;
use std::path::Path;

const INLINE_CSS: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
.container { max-width: 1200px; margin: 0 auto; }
.header { background-color: #f8f9fa; padding: 20px; border-radius: 5px; }
.test-case { margin: 10px 0; padding: 10px; border: 1px solid #ddd; border-radius: 5px; }
.pass { color: green; font-weight: bold; }
.fail { color: red; font-weight: bold; }
.timestamp { color: #666; font-size: 0.9em; }
";

/// Renders the report and writes it to `path`, creating any missing parent
/// directories first.
pub fn write_html_report(report: &ValidationReport, path: &Path) -> std::io::Result<()> {
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let html = render_html(report, &generated_at);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
}

/// Renders the report as a self-contained HTML document.
pub fn render_html(report: &ValidationReport, generated_at: &str) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<title>Data Validation Report</title>\n");
    html.push_str("<style>\n");
    html.push_str(INLINE_CSS);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    html.push_str("<div class=\"header\">\n<h1>Data Validation Report</h1>\n");
    html.push_str(&format!(
        "<p class=\"timestamp\">Generated on: {}</p>\n",
        escape_html(generated_at)
    ));
    html.push_str(&format!(
        "<p>{} checks, {} failures</p>\n",
        report.len(),
        report.failures().len()
    ));
    html.push_str("</div>\n");

    for outcome in report.outcomes() {
        let (class, status) = if outcome.passed {
            ("pass", "PASS")
        } else {
            ("fail", "FAIL")
        };
        html.push_str("<div class=\"test-case\">\n");
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&outcome.rule_name)));
        html.push_str(&format!(
            "<p><strong>File:</strong> {}</p>\n",
            escape_html(&outcome.file)
        ));
        html.push_str(&format!(
            "<p><strong>Status:</strong> <span class=\"{class}\">{status}</span></p>\n"
        ));
        html.push_str(&format!(
            "<p><strong>Details:</strong> {}</p>\n",
            escape_html(&outcome.detail)
        ));
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
