//! Conformance tests: run the lint pipeline over fixture worlds.
//!
//! Each fixture in tests/fixtures/ has:
//! - manifest.json: the raw world manifest
//! - expect.json: the exact report the pipeline must produce
//!
//! These tests load the fixture, lint it with the standard registry,
//! and compare the full report — verdict, summary, sorted violations,
//! and the legacy compliance flag — against the expected output.

use serde_json::Value;
use std::path::{Path, PathBuf};
use worldseed_rules::{RuleRegistry, lint_manifest};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_json(path: &Path) -> Value {
    let raw = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()))
}

fn run_fixture(name: &str) {
    let dir = fixtures_dir().join(name);
    let manifest = load_json(&dir.join("manifest.json"));
    let expected = load_json(&dir.join("expect.json"));

    let registry = RuleRegistry::standard();
    let report = lint_manifest(&manifest, &registry);
    let report_json = serde_json::to_value(&report).expect("failed to serialize report");

    assert_eq!(
        report_json,
        expected,
        "\n\nFixture: {name}\n\nGot:\n{}\n\nExpected:\n{}\n",
        serde_json::to_string_pretty(&report_json).unwrap(),
        serde_json::to_string_pretty(&expected).unwrap(),
    );
}

#[test]
fn golden_l2_world() {
    run_fixture("golden_l2_world");
}

#[test]
fn golden_l3_world() {
    run_fixture("golden_l3_world");
}

#[test]
fn adversarial_missing_boundary() {
    run_fixture("adversarial_missing_boundary");
}

#[test]
fn adversarial_l0_dynamics() {
    run_fixture("adversarial_l0_dynamics");
}

#[test]
fn adversarial_blocked_root() {
    run_fixture("adversarial_blocked_root");
}

#[test]
fn adversarial_degradation_inverse() {
    run_fixture("adversarial_degradation_inverse");
}

#[test]
fn adversarial_unknown_uncertainty_l3() {
    run_fixture("adversarial_unknown_uncertainty_l3");
}

#[test]
fn reports_are_byte_identical_across_runs() {
    let manifest = load_json(&fixtures_dir().join("golden_l2_world/manifest.json"));
    let registry = RuleRegistry::standard();
    let first = serde_json::to_string(&lint_manifest(&manifest, &registry)).unwrap();
    let second = serde_json::to_string(&lint_manifest(&manifest, &registry)).unwrap();
    assert_eq!(first, second);
}
