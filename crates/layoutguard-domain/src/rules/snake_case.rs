use crate::error::RuleSetError;
use crate::rule::compile;
use regex::Regex;

/// Unanchored snake_case fragment: lowercase alphanumeric groups joined by single underscores.
pub(crate) const SNAKE_CASE: &str = r"[a-z0-9]+(?:_[a-z0-9]+)*";

/// Precompiled whole-string snake_case test, shared by the communication rules.
#[derive(Clone, Debug)]
pub struct SnakeCase(Regex);

impl SnakeCase {
    pub fn new(rule_id: &'static str) -> Result<Self, RuleSetError> {
        Ok(Self(compile(rule_id, &format!("^{SNAKE_CASE}$"))?))
    }

    pub fn is_match(&self, segment: &str) -> bool {
        self.0.is_match(segment)
    }
}
