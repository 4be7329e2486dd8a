//! Consistency rules: cross-cutting checks over the flat quantity
//! registry.
//!
//! These rules never re-walk the action/observer trees; they operate
//! uniformly over every quantity the builder registered.

use worldseed_kernel::{AxiomId, NumericField, SemanticContext, Violation};

pub mod rule {
    pub const PROVENANCE_MISSING: &str = "CONSISTENCY-PROVENANCE-MISSING";
    pub const UNCERTAINTY_NEGATIVE: &str = "CONSISTENCY-UNCERTAINTY-NEGATIVE";
    pub const UNCERTAINTY_VALUE_CONFLICT: &str = "CONSISTENCY-UNCERTAINTY-VALUE-CONFLICT";
    pub const UNIT_MISMATCH: &str = "CONSISTENCY-UNIT-MISMATCH";
}

/// Every quantity declares a non-empty provenance.
pub fn provenance(context: &SemanticContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (key, quantity) in &context.quantities {
        if !quantity.has_provenance() {
            violations.push(Violation::error(
                rule::PROVENANCE_MISSING,
                Some(AxiomId::S6),
                key.clone(),
                "Quantity MUST declare provenance.",
            ));
        }
    }
    violations
}

/// Numeric uncertainty must be non-negative; an unknown value carrying
/// a precise numeric uncertainty is surfaced as a warning (a known
/// noise floor on an unknown value is physically meaningful, but the
/// asymmetry is worth an audit trail).
pub fn uncertainty(context: &SemanticContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (key, quantity) in &context.quantities {
        if let NumericField::Known(value) = quantity.uncertainty
            && value < 0.0
        {
            violations.push(Violation::error(
                rule::UNCERTAINTY_NEGATIVE,
                Some(AxiomId::S16),
                key.clone(),
                "Uncertainty MUST be non-negative.",
            ));
        }
        if quantity.value.is_unknown() && quantity.uncertainty.is_known() {
            violations.push(Violation::warning(
                rule::UNCERTAINTY_VALUE_CONFLICT,
                Some(AxiomId::S16),
                key.clone(),
                "Unknown value declared with precise numeric uncertainty.",
            ));
        }
    }
    violations
}

/// Unit consistency across duplicate declarations of one quantity.
///
/// Structurally empty: the registry holds exactly one quantity per
/// path, so a conflicting duplicate is unrepresentable in this context
/// shape. The rule stays registered to keep the catalog's contract
/// explicit.
pub fn units(_context: &SemanticContext) -> Vec<Violation> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use worldseed_kernel::{Severity, build_context};

    fn context_for(manifest: serde_json::Value) -> SemanticContext {
        build_context(&manifest).expect("manifest should construct")
    }

    #[test]
    fn missing_or_empty_provenance_is_flagged() {
        let context = context_for(json!({
            "world": {"id": "x"},
            "ontology": {"entities": ["p"]},
            "actions": [{
                "name": "move",
                "parameters": {
                    "dx": {"value": 1.0, "unit": "meter", "uncertainty": 0.1},
                    "dy": {"value": 1.0, "unit": "meter", "uncertainty": 0.1, "provenance": ""}
                },
                "stochastic": false
            }]
        }));
        let violations = provenance(&context);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.severity == Severity::Error));
    }

    #[test]
    fn negative_uncertainty_is_an_error() {
        let context = context_for(json!({
            "world": {"id": "x"},
            "ontology": {"entities": ["p"]},
            "actions": [{
                "name": "move",
                "parameters": {"dx": {"value": 1.0, "unit": "meter", "uncertainty": -0.1, "provenance": "control"}},
                "stochastic": false
            }]
        }));
        let violations = uncertainty(&context);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, rule::UNCERTAINTY_NEGATIVE);
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn unknown_value_with_precise_uncertainty_is_a_warning() {
        let context = context_for(json!({
            "world": {"id": "x"},
            "ontology": {"entities": ["p"]},
            "observers": [{
                "name": "camera",
                "operator": "pinhole",
                "boundary": "fov",
                "noise": {"value": "unknown", "unit": "pixel", "uncertainty": 1.0, "provenance": "sensor"}
            }]
        }));
        let violations = uncertainty(&context);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, rule::UNCERTAINTY_VALUE_CONFLICT);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert_eq!(violations[0].path, "observer:camera:noise");
    }

    #[test]
    fn unknown_value_with_unknown_uncertainty_is_consistent() {
        let context = context_for(json!({
            "world": {"id": "x"},
            "ontology": {"entities": ["p"]},
            "actions": [{
                "name": "move",
                "parameters": {"dx": {"value": "unknown", "unit": "meter", "uncertainty": "unknown", "provenance": "control"}},
                "stochastic": false
            }]
        }));
        assert!(uncertainty(&context).is_empty());
    }
}
