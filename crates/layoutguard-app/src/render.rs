//! Render use cases: text, markdown and GitHub annotations from in-memory reports.

use layoutguard_render::RenderableReport;

/// Plain-text findings, or the all-clear line when nothing was found at all.
pub fn render_text(report: &RenderableReport) -> String {
    if report.data.findings_total == 0 {
        return "OK: all paths conform".to_string();
    }
    let mut out = layoutguard_render::render_text(report);
    if let Some(reason) = &report.data.truncated_reason {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("({reason})"));
    }
    out
}

pub fn render_markdown(report: &RenderableReport) -> String {
    layoutguard_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, path_prefix: &str, max: usize) -> Vec<String> {
    layoutguard_render::render_github_annotations(report, path_prefix)
        .into_iter()
        .take(max)
        .collect()
}
