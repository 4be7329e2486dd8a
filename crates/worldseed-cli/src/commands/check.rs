//! `worldseed-lint check`: lint one manifest and emit the report.

use crate::support;
use worldseed_rules::{RuleRegistry, lint_manifest};

pub fn run(manifest_path: String, strict: bool) -> ! {
    let registry = if strict {
        RuleRegistry::strict()
    } else {
        RuleRegistry::standard()
    };

    let report = match support::load_manifest(&manifest_path) {
        Ok(manifest) => lint_manifest(&manifest, &registry),
        Err(blocking_report) => blocking_report,
    };

    support::emit_report(&report)
}
