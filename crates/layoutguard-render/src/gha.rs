use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path}::{message}`
///
/// `path_prefix` is prepended to the tree path so annotations point at
/// repo-relative files (`tree` + `/communication/x` -> `tree/communication/x`).
pub fn render_github_annotations(report: &RenderableReport, path_prefix: &str) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let level = match f.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let file = repo_file(path_prefix, &f.path);
        let message = escape_data(&format!("[{}:{}] {}", f.rule_id, f.code, f.message));

        if file.is_empty() {
            out.push(format!("::{}::{}", level, message));
        } else {
            out.push(format!("::{} file={}::{}", level, escape_property(&file), message));
        }
    }

    out
}

fn repo_file(prefix: &str, tree_path: &str) -> String {
    let prefix = prefix.trim_matches('/');
    let rel = tree_path.trim_start_matches('/');
    match (prefix.is_empty() || prefix == ".", rel.is_empty()) {
        (true, _) => rel.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}/{rel}"),
    }
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
