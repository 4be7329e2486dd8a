//! Violation records and the axiom identifier space.
//!
//! A violation is data, never a fault: checking functions return
//! violations, and nothing between emission and reporting may alter or
//! suppress a violation's severity.

use serde::{Deserialize, Serialize};

/// Severity of a violation. `Error` orders before `Warning` so the
/// derived ordering doubles as the report's severity rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
}

/// One of the 19 normative axioms, S1 through S19.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AxiomId {
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    S8,
    S9,
    S10,
    S11,
    S12,
    S13,
    S14,
    S15,
    S16,
    S17,
    S18,
    S19,
}

impl AxiomId {
    /// Every axiom in canonical ascending order.
    pub const ALL: [AxiomId; 19] = [
        Self::S1,
        Self::S2,
        Self::S3,
        Self::S4,
        Self::S5,
        Self::S6,
        Self::S7,
        Self::S8,
        Self::S9,
        Self::S10,
        Self::S11,
        Self::S12,
        Self::S13,
        Self::S14,
        Self::S15,
        Self::S16,
        Self::S17,
        Self::S18,
        Self::S19,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::S3 => "S3",
            Self::S4 => "S4",
            Self::S5 => "S5",
            Self::S6 => "S6",
            Self::S7 => "S7",
            Self::S8 => "S8",
            Self::S9 => "S9",
            Self::S10 => "S10",
            Self::S11 => "S11",
            Self::S12 => "S12",
            Self::S13 => "S13",
            Self::S14 => "S14",
            Self::S15 => "S15",
            Self::S16 => "S16",
            Self::S17 => "S17",
            Self::S18 => "S18",
            Self::S19 => "S19",
        }
    }
}

impl std::fmt::Display for AxiomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved rule identifiers for the blocking/infrastructure class.
///
/// These live outside the axiom namespace: they never represent domain
/// non-compliance, only the inability to evaluate compliance at all.
/// Any violation carrying one of them forces the BLOCKED verdict.
pub mod blocking_rule {
    pub const CLI_IO_ERROR: &str = "CLI-IO-ERROR";
    pub const CLI_JSON_ERROR: &str = "CLI-JSON-ERROR";
    pub const CONSTRUCTION_ERROR: &str = "CONSTRUCTION-ERROR";

    /// True when `rule` belongs to the blocking class.
    pub fn is_blocking(rule: &str) -> bool {
        matches!(rule, CLI_IO_ERROR | CLI_JSON_ERROR | CONSTRUCTION_ERROR)
    }
}

/// One finding from one check, in the fixed five-field report shape.
///
/// `axiom` is legitimately `None` for CLI/IO/construction-class
/// violations; every domain rule names its axiom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub severity: Severity,
    pub rule: String,
    pub axiom: Option<AxiomId>,
    pub path: String,
    pub message: String,
}

impl Violation {
    /// An ERROR-severity violation.
    pub fn error(
        rule: impl Into<String>,
        axiom: Option<AxiomId>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            rule: rule.into(),
            axiom,
            path: path.into(),
            message: message.into(),
        }
    }

    /// A WARNING-severity violation.
    pub fn warning(
        rule: impl Into<String>,
        axiom: Option<AxiomId>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            rule: rule.into(),
            axiom,
            path: path.into(),
            message: message.into(),
        }
    }

    /// Report ordering key: severity rank, then rule, path, message,
    /// all lexicographic ascending.
    fn sort_key(&self) -> (Severity, &str, &str, &str) {
        (self.severity, &self.rule, &self.path, &self.message)
    }
}

impl PartialOrd for Violation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Violation {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}
