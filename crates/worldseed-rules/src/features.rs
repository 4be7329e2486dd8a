//! Feature rules: correct semantic usage of declared features.
//!
//! Feature rules enforce semantic correctness, not existence. They may
//! reference multiple axioms and never loosen an axiom-level
//! constraint.

use worldseed_kernel::{AxiomId, SemanticContext, Violation};

pub mod rule {
    pub const ACTION_PARAMETERS: &str = "FEATURE-ACTION-PARAMETERS";
    pub const OBSERVER_OPERATOR: &str = "FEATURE-OBSERVER-OPERATOR";
    pub const SENSING_BOUNDARY: &str = "FEATURE-SENSING-BOUNDARY";
    pub const NUMERICAL_UNIT: &str = "FEATURE-NUMERICAL-UNIT";
    pub const NUMERICAL_UNCERTAINTY: &str = "FEATURE-NUMERICAL-UNCERTAINTY";
    pub const IRREVERSIBILITY: &str = "FEATURE-IRREVERSIBILITY";
}

/// A declared action carries causal meaning only through parameters.
pub fn action_parameters(context: &SemanticContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    for action in context.actions.values() {
        if action.parameters.is_empty() {
            violations.push(Violation::error(
                rule::ACTION_PARAMETERS,
                Some(AxiomId::S5),
                format!("actions[{}].parameters", action.name),
                "Action MUST declare at least one parameter.",
            ));
        }
    }
    violations
}

/// A declared observer names its observation operator.
pub fn observer_operator(context: &SemanticContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    for observer in context.observers.values() {
        if observer.operator.is_none() {
            violations.push(Violation::error(
                rule::OBSERVER_OPERATOR,
                Some(AxiomId::S11),
                format!("observers[{}].operator", observer.name),
                "Observer MUST declare an operator.",
            ));
        }
    }
    violations
}

/// A declared observer names its sensing boundary.
pub fn sensing_boundary(context: &SemanticContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    for observer in context.observers.values() {
        if observer.boundary.is_none() {
            violations.push(Violation::error(
                rule::SENSING_BOUNDARY,
                Some(AxiomId::S12),
                format!("observers[{}].boundary", observer.name),
                "Observer MUST declare sensing boundary.",
            ));
        }
    }
    violations
}

/// Every quantity declares a non-empty unit and declares its
/// uncertainty. An explicit unknown uncertainty is legal here; only an
/// entirely undeclared one is a violation (L3 tightens this further).
pub fn numerical_semantics(context: &SemanticContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (key, quantity) in &context.quantities {
        if !quantity.has_unit() {
            violations.push(Violation::error(
                rule::NUMERICAL_UNIT,
                Some(AxiomId::S16),
                key.clone(),
                "Numerical quantity MUST declare unit.",
            ));
        }
        if quantity.uncertainty.is_absent() {
            violations.push(Violation::error(
                rule::NUMERICAL_UNCERTAINTY,
                Some(AxiomId::S16),
                key.clone(),
                "Numerical quantity MUST declare uncertainty.",
            ));
        }
    }
    violations
}

/// An irreversible transformation is auditable only if it says what it
/// destroys.
pub fn irreversibility(context: &SemanticContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    for edge in &context.degradation_graph.edges {
        if edge.irreversible && edge.destroyed_distinctions.is_empty() {
            violations.push(Violation::error(
                rule::IRREVERSIBILITY,
                Some(AxiomId::S14),
                edge.path(),
                "Irreversible operation MUST declare destroyed distinctions.",
            ));
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use worldseed_kernel::build_context;

    fn context_for(manifest: serde_json::Value) -> SemanticContext {
        build_context(&manifest).expect("manifest should construct")
    }

    #[test]
    fn parameterless_action_is_flagged() {
        let context = context_for(json!({
            "world": {"id": "x"},
            "ontology": {"entities": ["p"]},
            "actions": [{"name": "noop", "parameters": {}, "stochastic": false}]
        }));
        let violations = action_parameters(&context);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "actions[noop].parameters");
    }

    #[test]
    fn undeclared_operator_is_flagged() {
        let context = context_for(json!({
            "world": {"id": "x"},
            "ontology": {"entities": ["p"]},
            "observers": [{
                "name": "camera",
                "boundary": "fov",
                "noise": {"value": 0.5, "unit": "pixel", "uncertainty": 1.0, "provenance": "sensor"}
            }]
        }));
        let violations = observer_operator(&context);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "observers[camera].operator");
    }

    #[test]
    fn unknown_uncertainty_is_declared_absent_is_not() {
        let declared = context_for(json!({
            "world": {"id": "x"},
            "ontology": {"entities": ["p"]},
            "actions": [{
                "name": "move",
                "parameters": {"dx": {"value": "unknown", "unit": "meter", "uncertainty": "unknown", "provenance": "control"}},
                "stochastic": false
            }]
        }));
        assert!(numerical_semantics(&declared).is_empty());

        let undeclared = context_for(json!({
            "world": {"id": "x"},
            "ontology": {"entities": ["p"]},
            "actions": [{
                "name": "move",
                "parameters": {"dx": {"value": "unknown", "unit": "meter", "provenance": "control"}},
                "stochastic": false
            }]
        }));
        let violations = numerical_semantics(&undeclared);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, rule::NUMERICAL_UNCERTAINTY);
        assert_eq!(violations[0].path, "action:move:dx");
    }

    #[test]
    fn empty_unit_is_flagged() {
        let context = context_for(json!({
            "world": {"id": "x"},
            "ontology": {"entities": ["p"]},
            "actions": [{
                "name": "move",
                "parameters": {"dx": {"value": 1.0, "unit": "", "uncertainty": 0.1, "provenance": "control"}},
                "stochastic": false
            }]
        }));
        let violations = numerical_semantics(&context);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, rule::NUMERICAL_UNIT);
    }

    #[test]
    fn silent_irreversible_edge_is_flagged() {
        let context = context_for(json!({
            "world": {"id": "x"},
            "ontology": {"entities": ["p"]},
            "degradation": {
                "edges": [{"source": "raw", "target": "quantized", "irreversible": true}]
            }
        }));
        let violations = irreversibility(&context);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "degradation[raw->quantized]");
    }
}
