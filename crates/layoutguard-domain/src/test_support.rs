use crate::engine::Engine;
use crate::policy::{EffectiveConfig, FailOn};
use globset::{Glob, GlobSetBuilder};
use layoutguard_types::Severity;
use std::collections::BTreeMap;

pub fn engine() -> Engine {
    Engine::with_conventions().expect("convention rules compile")
}

pub fn expect_valid(paths: &[&str]) {
    let engine = engine();
    for path in paths {
        let c = engine.classify(path);
        assert!(
            c.is_valid(),
            "expected {path} to be valid, got {:?} from {}",
            c.message(),
            c.rule_id
        );
    }
}

pub fn expect_message(message: &str, paths: &[&str]) {
    let engine = engine();
    for path in paths {
        let c = engine.classify(path);
        assert_eq!(c.message(), Some(message), "unexpected result for {path}");
    }
}

pub fn config(default_severity: Severity) -> EffectiveConfig {
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        default_severity,
        codes: BTreeMap::new(),
        exclude: None,
    }
}

pub fn config_with_exclude(patterns: &[&str]) -> EffectiveConfig {
    let mut builder = GlobSetBuilder::new();
    for p in patterns {
        builder.add(Glob::new(p).expect("valid glob"));
    }
    EffectiveConfig {
        exclude: Some(builder.build().expect("glob set")),
        ..config(Severity::Error)
    }
}
