use crate::{RenderableReport, RenderableSeverity};

const INDENT: &str = "    ";

/// Format `(path, message)` pairs as error blocks:
///
/// ```text
/// <path>
///     Error: <message>
/// ```
///
/// Blocks are joined by a single newline, in the order given. No pairs, empty string.
pub fn render_error_blocks<'a, I>(errors: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    errors
        .into_iter()
        .map(|(path, message)| format!("{path}\n{INDENT}Error: {message}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-text report: one block per emitted finding, labelled by severity.
pub fn render_text(report: &RenderableReport) -> String {
    report
        .findings
        .iter()
        .map(|f| {
            let label = match f.severity {
                RenderableSeverity::Error => "Error",
                RenderableSeverity::Warning => "Warning",
                RenderableSeverity::Info => "Info",
            };
            format!("{}\n{INDENT}{label}: {}", f.path, f.message)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
