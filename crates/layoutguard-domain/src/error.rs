use thiserror::Error;

/// Construction-time misconfiguration of a rule set.
///
/// These are raised before any path is evaluated; a path that matches nothing is
/// reported as data, never through this type.
#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("rule {rule_id}: invalid pattern `{pattern}`")]
    InvalidPattern {
        rule_id: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule {0} is registered more than once")]
    DuplicateRule(&'static str),
}
