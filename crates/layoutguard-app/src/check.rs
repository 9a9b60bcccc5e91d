//! The `check` use case: gather paths, evaluate the conventions, produce a report.

use anyhow::Context;
use camino::Utf8Path;
use layoutguard_domain::Engine;
use layoutguard_settings::{LayoutguardConfigV1, Overrides, ResolvedConfig};
use layoutguard_types::{LayoutReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, TreePath, Verdict};
use time::OffsetDateTime;
use tracing::debug;

/// Where the paths to check come from.
#[derive(Clone, Debug)]
pub enum PathSource<'a> {
    /// Recursively list `root/sub_dir`.
    Directory {
        root: &'a Utf8Path,
        sub_dir: &'a Utf8Path,
        /// The config file in use; left out of the listing when it sits inside the tree.
        config_file: Option<&'a Utf8Path>,
    },
    /// Paths supplied by the caller (e.g. `--paths-from`).
    List(Vec<TreePath>),
}

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    pub source: PathSource<'a>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: LayoutReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, list paths, evaluate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        LayoutguardConfigV1::default()
    } else {
        layoutguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        layoutguard_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let paths = match input.source {
        PathSource::Directory {
            root,
            sub_dir,
            config_file,
        } => {
            let mut paths =
                layoutguard_repo::list_sub_directory(root, sub_dir).context("list directory")?;
            if let Some(own) = config_file.and_then(|f| config_tree_path(&root.join(sub_dir), f)) {
                debug!(path = %own, "skipping config file");
                paths.retain(|p| *p != own);
            }
            paths
        }
        PathSource::List(paths) => paths,
    };
    debug!(paths = paths.len(), profile = %resolved.effective.profile, "checking paths");

    let engine = Engine::with_conventions().context("compile convention rules")?;
    let domain = layoutguard_domain::evaluate(&engine, &paths, &resolved.effective);

    let finished_at = OffsetDateTime::now_utc();
    debug!(
        verdict = ?domain.verdict,
        findings = domain.findings.len(),
        "check finished"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at,
        verdict: domain.verdict,
        findings: domain.findings,
        data: domain.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Tree path of `config_file` when it lies below `listed`.
fn config_tree_path(listed: &Utf8Path, config_file: &Utf8Path) -> Option<TreePath> {
    config_file
        .strip_prefix(listed)
        .ok()
        .filter(|rel| !rel.as_str().is_empty())
        .map(TreePath::from_relative)
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "layoutguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
