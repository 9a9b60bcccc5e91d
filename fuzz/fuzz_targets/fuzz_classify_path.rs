//! Fuzz target for path classification.
//!
//! Goal: the engine is total. Every path gets exactly one classification,
//! classification never panics, and the parallel run agrees with the sequential one.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_classify_path
//! ```

#![no_main]

use arbitrary::Arbitrary;
use layoutguard_domain::Engine;
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

#[derive(Arbitrary, Debug)]
struct PathsInput {
    /// Segments joined under `/` to form one path each.
    paths: Vec<Vec<String>>,
}

fn engine() -> &'static Engine {
    static ENGINE: OnceLock<Engine> = OnceLock::new();
    ENGINE.get_or_init(|| Engine::with_conventions().expect("convention rules compile"))
}

fuzz_target!(|input: PathsInput| {
    if input.paths.len() > 64 {
        return;
    }

    let paths: Vec<String> = input
        .paths
        .into_iter()
        .map(|segments| format!("/{}", segments.join("/")))
        .filter(|p| p.len() <= 512)
        .collect();

    let engine = engine();
    for p in &paths {
        let c = engine.classify(p);
        assert!(c.is_valid() || c.message().is_some());
    }

    let sequential = engine.run(&paths);
    assert_eq!(engine.run_parallel(&paths), sequential);
    for p in &paths {
        assert!(sequential.contains(p));
    }
});
