use crate::error::RuleSetError;
use crate::rule::{MatchOutcome, Rule, compile};
use layoutguard_types::ids;
use regex::Regex;

/// `/lifecycle` and anything below it is valid. No finer constraint.
#[derive(Debug)]
pub struct LifecycleTree {
    tree: Regex,
}

impl LifecycleTree {
    pub fn new() -> Result<Self, RuleSetError> {
        Ok(Self {
            tree: compile(ids::RULE_LIFECYCLE_TREE, r"^/lifecycle(?:/.+)?$")?,
        })
    }
}

impl Rule for LifecycleTree {
    fn id(&self) -> &'static str {
        ids::RULE_LIFECYCLE_TREE
    }

    fn check(&self, path: &str) -> MatchOutcome {
        if self.tree.is_match(path) {
            MatchOutcome::Matched
        } else {
            MatchOutcome::NoMatch
        }
    }
}
