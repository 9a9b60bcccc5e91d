//! Pure layout rule evaluation (no IO).
//!
//! Input: a list of tree paths produced elsewhere.
//! Output: one classification per path, then findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod error;
pub mod policy;
pub mod report;
pub mod result;
pub mod rule;
pub mod rules;

mod engine;
mod evaluate;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{Classification, Engine};
pub use error::RuleSetError;
pub use evaluate::evaluate;
pub use result::{EvaluationResult, PathOutcome};
pub use rule::{MatchOutcome, Rule, RuleSet};
