use crate::error::RuleSetError;
use layoutguard_types::Violation;
use regex::Regex;
use std::fmt;

/// What a single rule says about a single path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The path is valid under this rule; no further rules are tried.
    Matched,
    /// The path is in this rule's domain but breaks a finer constraint.
    /// Counts as a match: evaluation stops and the violation is recorded.
    MatchedWithError(Violation),
    /// The rule has no opinion; the engine moves on to the next rule.
    NoMatch,
}

impl MatchOutcome {
    pub fn is_match(self) -> bool {
        !matches!(self, MatchOutcome::NoMatch)
    }
}

/// A named predicate over one tree path.
///
/// Implementations must be pure: the returned outcome is the only observable effect.
pub trait Rule: Send + Sync + fmt::Debug {
    /// Stable identifier, see `layoutguard_types::ids`.
    fn id(&self) -> &'static str;

    fn check(&self, path: &str) -> MatchOutcome;
}

/// An ordered collection of rules. Order is significant: the first rule that
/// returns anything other than [`MatchOutcome::NoMatch`] decides the path.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule at the lowest precedence so far.
    pub fn push(&mut self, rule: impl Rule + 'static) -> Result<(), RuleSetError> {
        let id = rule.id();
        if self.rules.iter().any(|r| r.id() == id) {
            return Err(RuleSetError::DuplicateRule(id));
        }
        self.rules.push(Box::new(rule));
        Ok(())
    }

    pub fn with(mut self, rule: impl Rule + 'static) -> Result<Self, RuleSetError> {
        self.push(rule)?;
        Ok(self)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Compile a rule pattern, attributing failures to the owning rule.
pub(crate) fn compile(rule_id: &'static str, pattern: &str) -> Result<Regex, RuleSetError> {
    Regex::new(pattern).map_err(|source| RuleSetError::InvalidPattern {
        rule_id,
        pattern: pattern.to_string(),
        source,
    })
}
