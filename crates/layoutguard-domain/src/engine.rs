use crate::error::RuleSetError;
use crate::result::EvaluationResult;
use crate::rule::{MatchOutcome, RuleSet};
use crate::rules;
use layoutguard_types::{Violation, ids};
use rayon::prelude::*;
use tracing::{debug, trace};

/// The single outcome recorded for one path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Rule that decided the path, or `ids::RULE_CATCH_ALL` when none did.
    pub rule_id: &'static str,
    pub violation: Option<Violation>,
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }

    pub fn message(&self) -> Option<&'static str> {
        self.violation.map(Violation::message)
    }

    fn catch_all() -> Self {
        Self {
            rule_id: ids::RULE_CATCH_ALL,
            violation: Some(Violation::PathNotAllowed),
        }
    }
}

/// Evaluates an ordered [`RuleSet`] against paths: first non-`NoMatch` wins,
/// no match means "path not allowed".
#[derive(Debug)]
pub struct Engine {
    rules: RuleSet,
}

impl Engine {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Engine over the reference convention set.
    pub fn with_conventions() -> Result<Self, RuleSetError> {
        Ok(Self::new(rules::conventions()?))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify one path. Total: always returns exactly one classification.
    pub fn classify(&self, path: &str) -> Classification {
        for rule in self.rules.iter() {
            match rule.check(path) {
                MatchOutcome::NoMatch => continue,
                MatchOutcome::Matched => {
                    trace!(path, rule = rule.id(), "matched");
                    return Classification {
                        rule_id: rule.id(),
                        violation: None,
                    };
                }
                MatchOutcome::MatchedWithError(violation) => {
                    trace!(path, rule = rule.id(), code = violation.code(), "matched with error");
                    return Classification {
                        rule_id: rule.id(),
                        violation: Some(violation),
                    };
                }
            }
        }
        trace!(path, "no rule matched");
        Classification::catch_all()
    }

    /// Classify every path, in input order.
    pub fn run<I, S>(&self, paths: I) -> EvaluationResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = EvaluationResult::default();
        for path in paths {
            let path = path.as_ref();
            if result.contains(path) {
                continue;
            }
            result.insert(path.to_string(), self.classify(path));
        }
        debug!(paths = result.len(), errors = result.error_count(), "evaluation finished");
        result
    }

    /// Same result as [`Engine::run`], with classification sharded across the rayon pool.
    pub fn run_parallel<S>(&self, paths: &[S]) -> EvaluationResult
    where
        S: AsRef<str> + Sync,
    {
        let classified: Vec<Classification> = paths
            .par_iter()
            .map(|p| self.classify(p.as_ref()))
            .collect();

        let mut result = EvaluationResult::default();
        for (path, classification) in paths.iter().zip(classified) {
            let path = path.as_ref();
            if result.contains(path) {
                continue;
            }
            result.insert(path.to_string(), classification);
        }
        debug!(
            paths = result.len(),
            errors = result.error_count(),
            "parallel evaluation finished"
        );
        result
    }
}
