//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Totality and determinism of classification
//! - The catch-all for paths outside the two allowed trees
//! - Agreement between sequential and parallel runs

use crate::evaluate::evaluate;
use crate::test_support::{config, engine};
use layoutguard_types::{Severity, Violation, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// One path segment: snake_case, mixed case, or a dotted file name.
fn arb_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z0-9]{1,8}(_[a-z0-9]{1,8}){0,2}").unwrap(),
        prop::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,12}").unwrap(),
        prop::string::string_regex("[a-z_]{1,12}\\.(h|cpp|cxx|txt)").unwrap(),
        Just("BUILD".to_string()),
    ]
}

/// Absolute tree paths biased towards the two allowed roots.
fn arb_tree_path() -> impl Strategy<Value = String> {
    let root = prop_oneof![
        Just("communication".to_string()),
        Just("lifecycle".to_string()),
        arb_segment(),
    ];
    (root, prop::collection::vec(arb_segment(), 0..4)).prop_map(|(root, rest)| {
        let mut path = format!("/{root}");
        for seg in rest {
            path.push('/');
            path.push_str(&seg);
        }
        path
    })
}

// ============================================================================
// Property tests: Classification invariants
// ============================================================================

proptest! {
    /// Every path receives exactly one classification, and it is stable.
    #[test]
    fn classification_is_total_and_deterministic(path in arb_tree_path()) {
        let engine = engine();
        let first = engine.classify(&path);
        let second = engine.classify(&path);
        prop_assert_eq!(first, second);
        prop_assert!(first.is_valid() || first.message().is_some());
    }

    /// Anything outside /lifecycle and /communication is rejected by the catch-all.
    #[test]
    fn foreign_roots_fall_through_to_catch_all(
        root in "[a-z][a-z0-9_]{0,10}",
        rest in prop::collection::vec(arb_segment(), 0..3),
    ) {
        prop_assume!(root != "lifecycle" && root != "communication");
        let mut path = format!("/{root}");
        for seg in rest {
            path.push('/');
            path.push_str(&seg);
        }
        let c = engine().classify(&path);
        prop_assert_eq!(c.rule_id, ids::RULE_CATCH_ALL);
        prop_assert_eq!(c.violation, Some(Violation::PathNotAllowed));
    }

    /// Everything strictly under /lifecycle is accepted.
    #[test]
    fn lifecycle_subtree_is_always_valid(rest in prop::collection::vec(arb_segment(), 1..5)) {
        let path = format!("/lifecycle/{}", rest.join("/"));
        prop_assert!(engine().classify(&path).is_valid());
    }

    /// Matching codec and conversion files are valid for any snake_case type.
    #[test]
    fn well_named_sources_are_valid(
        ty in "[a-z0-9]{1,8}(_[a-z0-9]{1,8}){0,2}",
        kind in prop_oneof![Just("codec"), Just("conversion")],
        ext in prop_oneof![Just("h"), Just("cpp")],
    ) {
        let path = format!("/communication/{ty}/{ty}_{kind}.{ext}");
        prop_assert!(engine().classify(&path).is_valid(), "{}", path);
    }
}

// ============================================================================
// Property tests: Run invariants
// ============================================================================

proptest! {
    #[test]
    fn parallel_run_agrees_with_sequential(paths in prop::collection::vec(arb_tree_path(), 0..60)) {
        let engine = engine();
        prop_assert_eq!(engine.run_parallel(&paths), engine.run(&paths));
    }

    #[test]
    fn every_unique_input_path_is_recorded(paths in prop::collection::vec(arb_tree_path(), 0..40)) {
        let result = engine().run(&paths);
        for p in &paths {
            prop_assert!(result.contains(p));
        }
    }

    /// The number of findings emitted never exceeds max_findings.
    #[test]
    fn findings_count_respects_max_findings(
        count in 1usize..50,
        max_findings in 1usize..60,
    ) {
        let paths: Vec<String> = (0..count).map(|i| format!("/stray{i}")).collect();
        let mut cfg = config(Severity::Error);
        cfg.max_findings = max_findings;

        let report = evaluate(&engine(), &paths, &cfg);
        prop_assert!(report.findings.len() <= max_findings);
        prop_assert_eq!(report.data.findings_total as usize, count);
        prop_assert_eq!(report.data.truncated_reason.is_some(), count > max_findings);
    }
}
