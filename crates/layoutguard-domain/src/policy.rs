use globset::GlobSet;
use layoutguard_types::{Severity, Violation};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug)]
pub struct CodePolicy {
    pub severity: Severity,
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    /// Severity for codes without an explicit entry in `codes`.
    pub default_severity: Severity,
    /// code -> policy
    pub codes: BTreeMap<String, CodePolicy>,
    /// Paths matching this set are dropped before evaluation.
    /// Patterns are validated in layoutguard-settings.
    pub exclude: Option<GlobSet>,
}

impl EffectiveConfig {
    pub fn severity_for(&self, violation: Violation) -> Severity {
        self.codes
            .get(violation.code())
            .map(|p| p.severity)
            .unwrap_or(self.default_severity)
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude.as_ref().is_some_and(|set| set.is_match(path))
    }
}
