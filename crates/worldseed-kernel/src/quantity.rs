//! Canonical physical quantity representation.
//!
//! A quantity is never a bare number: it carries a unit, an uncertainty,
//! and a provenance, any of which may be explicitly unknown or entirely
//! undeclared. The three-way distinction between a known number, the
//! explicit `"unknown"` marker, and a field that was never declared is
//! preserved from the manifest all the way into violation messages.

/// A numeric manifest field in one of three observable states.
///
/// - `Known(x)`: the manifest declared a concrete number.
/// - `Unknown`: the manifest declared the literal `"unknown"` sentinel.
/// - `Absent`: the manifest did not declare the field at all.
///
/// The states are never collapsed into each other. In particular,
/// `Absent` is not `Unknown`: an author who writes `"unknown"` has made
/// a statement, an author who writes nothing has not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericField {
    Known(f64),
    Unknown,
    Absent,
}

impl NumericField {
    /// Returns the concrete number, if one was declared.
    pub fn known(self) -> Option<f64> {
        match self {
            Self::Known(x) => Some(x),
            Self::Unknown | Self::Absent => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True when the field was declared, either as a number or as the
    /// explicit unknown sentinel.
    pub fn is_declared(self) -> bool {
        !self.is_absent()
    }
}

/// Canonical physical quantity.
///
/// Invariants enforced by the rule catalog rather than by construction:
/// a quantity must declare a non-empty unit, an uncertainty (numeric or
/// explicitly unknown), and a provenance; a numeric uncertainty must be
/// non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: NumericField,
    pub unit: Option<String>,
    pub uncertainty: NumericField,
    pub provenance: Option<String>,
    /// Manifest field path this quantity was built from, e.g.
    /// `actions[move].parameters[dx]`.
    pub path: String,
}

impl Quantity {
    /// True when a non-empty unit was declared.
    pub fn has_unit(&self) -> bool {
        self.unit.as_deref().is_some_and(|unit| !unit.is_empty())
    }

    /// True when a non-empty provenance was declared.
    pub fn has_provenance(&self) -> bool {
        self.provenance.as_deref().is_some_and(|p| !p.is_empty())
    }
}
