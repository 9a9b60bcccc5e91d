//! The `explain` use case: what a rule accepts, or what a code means, and how to fix it.

use layoutguard_types::explain::{self, Explanation};
use layoutguard_types::{Violation, ids};

/// A documented rule or code, with the violation it reports (if any).
#[derive(Clone, Debug)]
pub struct RuleCard {
    pub identifier: String,
    pub explanation: Explanation,
    /// `None` for rules that only ever accept paths.
    pub reports: Option<Violation>,
}

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(RuleCard),
    NotFound {
        identifier: String,
        /// Known identifiers that contain the requested one.
        suggestions: Vec<&'static str>,
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(explanation) => ExplainOutput::Found(RuleCard {
            identifier: identifier.to_string(),
            explanation,
            reports: reported_violation(identifier),
        }),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            suggestions: suggestions_for(identifier),
        },
    }
}

fn reported_violation(identifier: &str) -> Option<Violation> {
    match identifier {
        ids::RULE_COMMUNICATION_SUBDIR => Some(Violation::DirectoryNotSnakeCase),
        ids::RULE_COMMUNICATION_SOURCE_FILE => Some(Violation::InvalidSourceFile),
        ids::RULE_CATCH_ALL => Some(Violation::PathNotAllowed),
        other => Violation::from_code(other),
    }
}

fn suggestions_for(identifier: &str) -> Vec<&'static str> {
    let needle = identifier.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    explain::all_rule_ids()
        .iter()
        .chain(explain::all_codes())
        .copied()
        .filter(|known| known.contains(needle.as_str()))
        .collect()
}

/// Terminal rendering of a rule card.
pub fn format_explanation(card: &RuleCard) -> String {
    let exp = &card.explanation;
    let mut out = format!("{}: {}\n", card.identifier, exp.title);
    match card.reports {
        Some(v) => out.push_str(&format!("reports {} (\"{}\")\n", v.code(), v.message())),
        None => out.push_str("never reports a violation\n"),
    }
    out.push('\n');
    out.push_str(exp.description);
    out.push_str("\n\nTo fix:\n");
    push_indented(&mut out, exp.remediation);
    out.push_str("\nRejected:\n");
    push_indented(&mut out, exp.examples.before);
    out.push_str("Accepted:\n");
    push_indented(&mut out, exp.examples.after);
    out
}

fn push_indented(out: &mut String, text: &str) {
    for line in text.lines() {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
}

pub fn format_not_found(identifier: &str, suggestions: &[&str]) -> String {
    let mut out = format!("layoutguard has no rule or code named `{identifier}`\n");
    if !suggestions.is_empty() {
        out.push_str(&format!("did you mean: {}\n", suggestions.join(", ")));
    }
    out.push_str(&format!(
        "rules, in evaluation order: {}\n",
        explain::all_rule_ids().join(", ")
    ));
    out.push_str(&format!("codes: {}\n", explain::all_codes().join(", ")));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(identifier: &str) -> RuleCard {
        match run_explain(identifier) {
            ExplainOutput::Found(card) => card,
            other => panic!("expected a card for {identifier}, got {other:?}"),
        }
    }

    #[test]
    fn rules_and_codes_report_their_violation() {
        assert_eq!(
            card("communication.subdir").reports,
            Some(Violation::DirectoryNotSnakeCase)
        );
        assert_eq!(
            card("invalid_source_file").reports,
            Some(Violation::InvalidSourceFile)
        );
        assert_eq!(card("layout.catch_all").reports, Some(Violation::PathNotAllowed));
        assert_eq!(card("lifecycle.tree").reports, None);
    }

    #[test]
    fn card_shows_message_and_examples() {
        let text = format_explanation(&card("communication.subdir"));
        assert!(text.starts_with("communication.subdir: "));
        assert!(text.contains("reports directory_not_snake_case (\"directory name must be snake_case\")"));
        assert!(text.contains("To fix:\n    "));
        assert!(text.contains("Rejected:\n    /communication/SomeType\n"));
        assert!(text.contains("Accepted:\n    /communication/some_type\n"));
    }

    #[test]
    fn accepting_rules_say_so() {
        let text = format_explanation(&card("communication.root"));
        assert!(text.contains("never reports a violation"));
    }

    #[test]
    fn unknown_identifier_suggests_close_names() {
        match run_explain("communication") {
            ExplainOutput::NotFound {
                identifier,
                suggestions,
            } => {
                assert_eq!(identifier, "communication");
                assert!(suggestions.contains(&"communication.subdir"));
                assert!(!suggestions.contains(&"lifecycle.tree"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        match run_explain("   ") {
            ExplainOutput::NotFound { suggestions, .. } => assert!(suggestions.is_empty()),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn not_found_lists_rules_and_codes() {
        let text = format_not_found("nope", &[]);
        assert!(text.starts_with("layoutguard has no rule or code named `nope`\n"));
        assert!(!text.contains("did you mean"));
        assert!(text.contains("rules, in evaluation order: lifecycle.tree, communication.root"));
        assert!(text.contains("codes: path_not_allowed"));

        let text = format_not_found("snake", &["directory_not_snake_case"]);
        assert!(text.contains("did you mean: directory_not_snake_case\n"));
    }
}
