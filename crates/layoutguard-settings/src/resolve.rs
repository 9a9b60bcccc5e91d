use crate::{model::LayoutguardConfigV1, presets};
use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};
use layoutguard_domain::policy::{CodePolicy, EffectiveConfig, FailOn};
use layoutguard_types::{Severity, Violation};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: LayoutguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    if !presets::is_known(&profile) {
        anyhow::bail!("unknown profile: {profile} (expected 'strict' or 'warn')");
    }
    let mut effective = presets::preset(&profile);

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-code overrides
    for (code, cc) in cfg.codes.iter() {
        if Violation::from_code(code).is_none() {
            anyhow::bail!("unknown code in [codes]: {code}");
        }
        if let Some(sev) = cc.severity.as_deref() {
            let severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {code}"))?;
            effective
                .codes
                .insert(code.clone(), CodePolicy { severity });
        }
    }

    if !cfg.exclude.is_empty() {
        effective.exclude = Some(build_exclude(&cfg.exclude)?);
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    Ok(ResolvedConfig { effective })
}

fn build_exclude(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).with_context(|| format!("invalid exclude glob: {pattern}"))?;
        builder.add(glob);
    }
    builder.build().context("build exclude glob set")
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
