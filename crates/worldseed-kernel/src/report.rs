//! Deterministic compliance reporting.
//!
//! The report is a pure function of the violation set. Two runs over
//! the same violations must produce byte-identical output; the sort in
//! [`generate_report`] is the load-bearing contract, never emission
//! order.

use serde::{Deserialize, Serialize};

use crate::violation::{Severity, Violation, blocking_rule};

/// Three-valued outcome of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "COMPLIANT")]
    Compliant,
    #[serde(rename = "NON-COMPLIANT")]
    NonCompliant,
    #[serde(rename = "BLOCKED")]
    Blocked,
}

/// Legacy two-valued compliance flag kept for downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compliance {
    #[serde(rename = "valid")]
    Valid,
    #[serde(rename = "invalid")]
    Invalid,
}

/// Violation tallies. `blocked` is a 0/1 flag, not a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub blocked: u8,
}

/// The final deterministic output of a lint run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub verdict: Verdict,
    pub summary: Summary,
    pub violations: Vec<Violation>,
    pub compliance: Compliance,
}

impl Report {
    pub fn is_compliant(&self) -> bool {
        self.verdict == Verdict::Compliant
    }
}

/// Aggregate raw findings into the canonical report.
///
/// Verdict precedence is strict: BLOCKED whenever any blocking-class
/// violation is present, NON-COMPLIANT when any ERROR remains, and
/// COMPLIANT otherwise. Warnings alone never prevent COMPLIANT.
pub fn generate_report(mut violations: Vec<Violation>) -> Report {
    let blocked = violations
        .iter()
        .any(|violation| blocking_rule::is_blocking(&violation.rule));
    let errors = violations
        .iter()
        .filter(|violation| violation.severity == Severity::Error)
        .count();
    let warnings = violations
        .iter()
        .filter(|violation| violation.severity == Severity::Warning)
        .count();

    let verdict = if blocked {
        Verdict::Blocked
    } else if errors > 0 {
        Verdict::NonCompliant
    } else {
        Verdict::Compliant
    };

    violations.sort();

    Report {
        verdict,
        summary: Summary {
            errors,
            warnings,
            blocked: u8::from(blocked),
        },
        violations,
        compliance: match verdict {
            Verdict::Compliant => Compliance::Valid,
            Verdict::NonCompliant | Verdict::Blocked => Compliance::Invalid,
        },
    }
}
