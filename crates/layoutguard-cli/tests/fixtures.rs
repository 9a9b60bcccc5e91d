//! End-to-end CLI integration tests using the fixture trees in `tests/fixtures/`.
//!
//! These tests run the CLI against each tree and verify:
//! 1. Exit code matches the verdict (0=pass/warn, 2=fail, 1=runtime error)
//! 2. Text, JSON and rendered outputs carry the expected findings

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a Command for the layoutguard binary.
#[allow(deprecated)]
fn layoutguard_cmd() -> Command {
    Command::cargo_bin("layoutguard").expect("layoutguard binary not found")
}

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("layoutguard-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

const AAS_TREE_TEXT: &str = "\
/communication/SomeType
    Error: directory name must be snake_case
/communication/SomeType/Codec.cpp
    Error: source files must be either <type>_codec.(h|cpp) or <type>_conversion.(h|cpp)
/foo
    Error: path not allowed
/foo/notes.txt
    Error: path not allowed
";

// ============================================================================
// check
// ============================================================================

#[test]
fn clean_tree_passes() {
    layoutguard_cmd()
        .arg("--root")
        .arg(fixtures_dir())
        .args(["check", "--sub-dir", "clean_tree"])
        .assert()
        .code(0)
        .stdout("OK: all paths conform\n");
}

#[test]
fn aas_tree_fails_with_sorted_text_report() {
    layoutguard_cmd()
        .arg("--root")
        .arg(fixtures_dir())
        .args(["check", "--sub-dir", "aas_tree"])
        .assert()
        .code(2)
        .stdout(AAS_TREE_TEXT);
}

#[test]
fn json_format_emits_v1_report() {
    let output = layoutguard_cmd()
        .arg("--root")
        .arg(fixtures_dir())
        .args(["check", "--sub-dir", "aas_tree", "--format", "json"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(2));

    let report: Value = serde_json::from_slice(&output.stdout).expect("report json");
    assert_eq!(report["schema"], "layoutguard.report.v1");
    assert_eq!(report["tool"]["name"], "layoutguard");
    assert_eq!(report["verdict"], "fail");
    assert_eq!(report["data"]["findings_total"], 4);
    assert_eq!(report["findings"][0]["rule_id"], "communication.subdir");
    assert_eq!(report["findings"][2]["rule_id"], "layout.catch_all");
}

#[test]
fn paths_from_stdin_keep_input_order() {
    let input = "/foo\n/communication\n/communication/some_type\n\
                 /communication/some_type/some_type_codec.h\n\
                 /communication/SomeType\n/communication/SomeType/Codec.cpp\n";
    let tmp = TempDir::new().expect("temp dir");

    layoutguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .args(["check", "--paths-from", "-"])
        .write_stdin(input)
        .assert()
        .code(2)
        .stdout(
            "/foo\n    Error: path not allowed\n\
             /communication/SomeType\n    Error: directory name must be snake_case\n\
             /communication/SomeType/Codec.cpp\n    Error: source files must be either \
             <type>_codec.(h|cpp) or <type>_conversion.(h|cpp)\n",
        );
}

#[test]
fn config_file_downgrades_to_warnings() {
    let tmp = TempDir::new().expect("temp dir");
    std::fs::write(
        tmp.path().join("layoutguard.toml"),
        "profile = \"warn\"\nfail_on = \"error\"\n",
    )
    .expect("write config");
    std::fs::create_dir_all(tmp.path().join("tree/stray")).expect("mkdir");

    layoutguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .args(["check", "--sub-dir", "tree"])
        .assert()
        .code(0)
        .stdout("/stray\n    Warning: path not allowed\n");
}

#[test]
fn exclude_globs_skip_paths() {
    let tmp = TempDir::new().expect("temp dir");
    std::fs::write(
        tmp.path().join("layoutguard.toml"),
        "exclude = [\"/.git\", \"/.git/**\"]\n",
    )
    .expect("write config");
    std::fs::create_dir_all(tmp.path().join(".git/objects")).expect("mkdir");
    std::fs::create_dir_all(tmp.path().join("lifecycle")).expect("mkdir");

    layoutguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("check")
        .assert()
        .code(0)
        .stdout("OK: all paths conform\n");
}

#[test]
fn max_findings_truncates() {
    let output = layoutguard_cmd()
        .arg("--root")
        .arg(fixtures_dir())
        .args(["--max-findings", "1", "check", "--sub-dir", "aas_tree", "--format", "json"])
        .output()
        .expect("run command");
    let report: Value = serde_json::from_slice(&output.stdout).expect("report json");
    assert_eq!(report["findings"].as_array().map(Vec::len), Some(1));
    assert_eq!(report["data"]["findings_total"], 4);
    assert!(report["data"]["truncated_reason"].is_string());
}

#[test]
fn max_findings_zero_still_fails_the_tree() {
    layoutguard_cmd()
        .arg("--root")
        .arg(fixtures_dir())
        .args(["--max-findings", "0", "check", "--sub-dir", "aas_tree"])
        .assert()
        .code(2)
        .stdout("(findings truncated to max_findings=0)\n");
}

#[test]
fn own_config_file_is_not_reported() {
    let tmp = TempDir::new().expect("temp dir");
    std::fs::write(tmp.path().join("layoutguard.toml"), "profile = \"strict\"\n")
        .expect("write config");
    std::fs::create_dir_all(tmp.path().join("lifecycle")).expect("mkdir");

    layoutguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("check")
        .assert()
        .code(0)
        .stdout("OK: all paths conform\n");
}

#[test]
fn missing_sub_dir_is_a_runtime_error_with_report() {
    let tmp = TempDir::new().expect("temp dir");
    let report_path = tmp.path().join("out/report.json");

    layoutguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .args(["check", "--sub-dir", "nope", "--report-out"])
        .arg(&report_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("layoutguard error"));

    let text = std::fs::read_to_string(&report_path).expect("report written");
    let report: Value = serde_json::from_str(&text).expect("report json");
    assert_eq!(report["findings"][0]["code"], "runtime_error");
}

#[test]
fn invalid_config_is_a_runtime_error() {
    let tmp = TempDir::new().expect("temp dir");
    std::fs::write(tmp.path().join("layoutguard.toml"), "exclude = [\"/a/[\"]\n")
        .expect("write config");

    layoutguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid exclude glob"));
}

// ============================================================================
// md / annotations / explain
// ============================================================================

fn write_aas_report(dir: &TempDir) -> PathBuf {
    let report_path = dir.path().join("report.json");
    layoutguard_cmd()
        .arg("--root")
        .arg(fixtures_dir())
        .args(["check", "--sub-dir", "aas_tree", "--report-out"])
        .arg(&report_path)
        .assert()
        .code(2);
    report_path
}

#[test]
fn md_renders_saved_report() {
    let tmp = TempDir::new().expect("temp dir");
    let report_path = write_aas_report(&tmp);

    layoutguard_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Verdict: **FAIL**"))
        .stdout(predicate::str::contains("`/communication/SomeType`"));
}

#[test]
fn annotations_render_saved_report() {
    let tmp = TempDir::new().expect("temp dir");
    let report_path = write_aas_report(&tmp);

    layoutguard_cmd()
        .arg("annotations")
        .arg("--report")
        .arg(&report_path)
        .args(["--path-prefix", "aas_tree", "--max", "2"])
        .assert()
        .success()
        .stdout(
            "::error file=aas_tree/communication/SomeType::[communication.subdir:directory_not_snake_case] directory name must be snake_case\n\
             ::error file=aas_tree/communication/SomeType/Codec.cpp::[communication.source_file:invalid_source_file] source files must be either <type>_codec.(h|cpp) or <type>_conversion.(h|cpp)\n",
        );
}

#[test]
fn explain_known_and_unknown() {
    layoutguard_cmd()
        .args(["explain", "communication.source_file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("To fix:"))
        .stdout(predicate::str::contains("reports invalid_source_file"));

    layoutguard_cmd()
        .args(["explain", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "layoutguard has no rule or code named `nope`",
        ));
}
