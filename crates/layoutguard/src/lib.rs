//! Library entry point: classify tree paths against the layout conventions and
//! format the violations.
//!
//! ```
//! let result = layoutguard::check_paths(["/foo", "/lifecycle"]).unwrap();
//! assert_eq!(
//!     layoutguard::format_errors(&result),
//!     "/foo\n    Error: path not allowed"
//! );
//! ```

#![forbid(unsafe_code)]

pub use layoutguard_domain::{
    Classification, Engine, EvaluationResult, MatchOutcome, PathOutcome, Rule, RuleSet,
    RuleSetError, rules,
};
pub use layoutguard_types::{TreePath, Violation};

/// Classify `paths` with the convention rule set.
pub fn check_paths<I, S>(paths: I) -> Result<EvaluationResult, RuleSetError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(Engine::with_conventions()?.run(paths))
}

/// One `<path>\n    Error: <message>` block per violating path, in input order.
pub fn format_errors(result: &EvaluationResult) -> String {
    layoutguard_render::render_error_blocks(result.errors().map(|(p, v)| (p, v.message())))
}
