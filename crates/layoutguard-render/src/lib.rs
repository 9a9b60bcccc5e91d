//! Rendering utilities for terminals and CI surfaces (text, Markdown, GitHub annotations).

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod text;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
pub use text::{render_error_blocks, render_text};

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::*;

    pub fn finding(severity: RenderableSeverity, path: &str, message: &str) -> RenderableFinding {
        RenderableFinding {
            severity,
            rule_id: "layout.catch_all".to_string(),
            code: "path_not_allowed".to_string(),
            message: message.to_string(),
            path: path.to_string(),
            help: None,
        }
    }

    pub fn report(
        verdict: RenderableVerdictStatus,
        findings: Vec<RenderableFinding>,
    ) -> RenderableReport {
        let n = findings.len() as u32;
        RenderableReport {
            verdict,
            findings,
            data: RenderableData {
                profile: "strict".to_string(),
                paths_scanned: 6,
                findings_emitted: n,
                findings_total: n,
                truncated_reason: None,
            },
        }
    }
}
