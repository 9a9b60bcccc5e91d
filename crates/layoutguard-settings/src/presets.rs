use layoutguard_domain::policy::{EffectiveConfig, FailOn};
use layoutguard_types::Severity;
use std::collections::BTreeMap;

/// Every finding is emitted unless `max_findings` is configured.
pub const DEFAULT_MAX_FINDINGS: usize = usize::MAX;

/// Preset profiles are opinionated defaults. Unknown names fall back to strict.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        _ => strict_profile(),
    }
}

pub fn is_known(profile: &str) -> bool {
    matches!(profile, "strict" | "warn")
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: DEFAULT_MAX_FINDINGS,
        default_severity: Severity::Error,
        codes: BTreeMap::new(),
        exclude: None,
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Warning,
        max_findings: DEFAULT_MAX_FINDINGS,
        default_severity: Severity::Warning,
        codes: BTreeMap::new(),
        exclude: None,
    }
}
