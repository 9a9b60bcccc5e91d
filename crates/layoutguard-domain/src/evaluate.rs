use crate::engine::Engine;
use crate::fingerprint::fingerprint_for_path;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use layoutguard_types::{Finding, LayoutData, Severity, TreePath, Verdict, Violation};
use serde_json::Value;
use tracing::debug;

/// Above this many paths the engine shards classification across threads.
const PARALLEL_THRESHOLD: usize = 4096;

pub fn evaluate<S: AsRef<str> + Sync>(
    engine: &Engine,
    paths: &[S],
    cfg: &EffectiveConfig,
) -> DomainReport {
    let (kept, excluded): (Vec<&str>, Vec<&str>) = paths
        .iter()
        .map(|p| p.as_ref())
        .partition(|p| !cfg.is_excluded(p));
    debug!(kept = kept.len(), excluded = excluded.len(), "paths selected");

    let result = if kept.len() >= PARALLEL_THRESHOLD {
        engine.run_parallel(&kept)
    } else {
        engine.run(&kept)
    };

    // Findings follow input order; the engine already made it deterministic.
    let findings: Vec<Finding> = result
        .entries()
        .filter_map(|e| {
            let violation = e.classification.violation?;
            Some(finding_for(
                e.classification.rule_id,
                violation,
                &e.path,
                cfg.severity_for(violation),
            ))
        })
        .collect();

    let total = findings.len() as u32;
    // Verdict and counts cover every finding, truncated or not.
    let verdict = compute_verdict(&findings, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&findings);

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }


    let data = LayoutData {
        profile: cfg.profile.clone(),
        paths_scanned: result.len() as u32,
        paths_excluded: excluded.len() as u32,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
        result,
    }
}

fn finding_for(rule_id: &str, violation: Violation, path: &str, severity: Severity) -> Finding {
    Finding {
        severity,
        rule_id: rule_id.to_string(),
        code: violation.code().to_string(),
        message: violation.message().to_string(),
        path: TreePath::new(path),
        help: Some(help_for(violation).to_string()),
        fingerprint: Some(fingerprint_for_path(rule_id, violation.code(), path)),
        data: Value::Null,
    }
}

fn help_for(violation: Violation) -> &'static str {
    match violation {
        Violation::PathNotAllowed => {
            "Move the entry under /lifecycle or /communication, or exclude it in layoutguard.toml."
        }
        Violation::DirectoryNotSnakeCase => {
            "Rename the directory to lowercase letters and digits joined by single underscores."
        }
        Violation::InvalidSourceFile => {
            "Name the file after its directory: <type>_codec.h, <type>_codec.cpp, <type>_conversion.h or <type>_conversion.cpp."
        }
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}
