use crate::engine::Classification;
use layoutguard_types::Violation;
use std::collections::HashMap;

/// One input path and the outcome recorded for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathOutcome {
    pub path: String,
    pub classification: Classification,
}

/// Mapping from each input path to zero-or-one violations.
///
/// Entries keep input order; each path slot is written once per run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvaluationResult {
    entries: Vec<PathOutcome>,
    index: HashMap<String, usize>,
}

impl EvaluationResult {
    pub(crate) fn insert(&mut self, path: String, classification: Classification) {
        debug_assert!(!self.index.contains_key(&path));
        self.index.insert(path.clone(), self.entries.len());
        self.entries.push(PathOutcome {
            path,
            classification,
        });
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&Classification> {
        self.index.get(path).map(|&i| &self.entries[i].classification)
    }

    /// The violation recorded for `path`, if any. Unknown paths have none.
    pub fn violation(&self, path: &str) -> Option<Violation> {
        self.get(path).and_then(|c| c.violation)
    }

    /// The error message recorded for `path`, if any.
    pub fn error(&self, path: &str) -> Option<&'static str> {
        self.violation(path).map(Violation::message)
    }

    /// True only for paths that were evaluated and passed.
    pub fn is_valid(&self, path: &str) -> bool {
        self.get(path).is_some_and(Classification::is_valid)
    }

    pub fn entries(&self) -> impl Iterator<Item = &PathOutcome> {
        self.entries.iter()
    }

    /// Paths with a violation, in input order.
    pub fn errors(&self) -> impl Iterator<Item = (&str, Violation)> {
        self.entries
            .iter()
            .filter_map(|e| e.classification.violation.map(|v| (e.path.as_str(), v)))
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
