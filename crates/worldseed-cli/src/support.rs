//! Shared CLI helpers: manifest loading and report emission.
//!
//! Pre-core failures (unreadable file, unparsable JSON) are converted
//! into the same report shape the core produces, through the blocking
//! violation path, so the caller always receives a full structured
//! report regardless of failure class.

use serde_json::Value;
use std::fs;
use worldseed_kernel::{Report, Verdict, Violation, blocking_rule, generate_report};

/// Load and parse the manifest file. On failure, returns the blocking
/// report to emit instead.
pub fn load_manifest(path: &str) -> Result<Value, Report> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            return Err(generate_report(vec![Violation::error(
                blocking_rule::CLI_IO_ERROR,
                None,
                path,
                format!("Failed to read manifest: {err}"),
            )]));
        }
    };
    match serde_json::from_str(&raw) {
        Ok(manifest) => Ok(manifest),
        Err(err) => Err(generate_report(vec![Violation::error(
            blocking_rule::CLI_JSON_ERROR,
            None,
            path,
            format!("Invalid JSON in manifest: {err}"),
        )])),
    }
}

/// Print the full report and exit with the verdict's exit code:
/// 0 COMPLIANT, 1 NON-COMPLIANT, 2 BLOCKED.
pub fn emit_report(report: &Report) -> ! {
    let rendered = serde_json::to_string_pretty(report).unwrap_or_else(|err| {
        eprintln!("error: failed to render report: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
    std::process::exit(match report.verdict {
        Verdict::Compliant => 0,
        Verdict::NonCompliant => 1,
        Verdict::Blocked => 2,
    })
}
