//! Profile rules: L0 through L3.
//!
//! Each profile's function fires only for the manifest's declared
//! profile; a manifest declares exactly one profile, and cumulative
//! lower-tier requirements are carried by the shared axiom rules (S5,
//! S9) rather than by data inheritance.

use worldseed_kernel::{AxiomId, NumericField, Profile, SemanticContext, Violation};

pub mod rule {
    pub const L0_ONTOLOGY: &str = "PROFILE-L0-ONTOLOGY";
    pub const L0_NO_DYNAMICS: &str = "PROFILE-L0-NO-DYNAMICS";
    pub const L1_ACTIONS: &str = "PROFILE-L1-ACTIONS";
    pub const L1_NO_OBSERVERS: &str = "PROFILE-L1-NO-OBSERVERS";
    pub const L2_OBSERVERS: &str = "PROFILE-L2-OBSERVERS";
    pub const L2_BOUNDARY: &str = "PROFILE-L2-BOUNDARY";
    pub const L3_UNCERTAINTY: &str = "PROFILE-L3-UNCERTAINTY";
}

/// L0 — Ontology. Identity and ontology only; no dynamics of any kind.
pub fn l0_ontology(context: &SemanticContext) -> Vec<Violation> {
    if context.profile.declared() != Some(Profile::L0) {
        return Vec::new();
    }
    let mut violations = Vec::new();
    if context.world.id.is_empty() || context.ontology.entities.is_empty() {
        violations.push(Violation::error(
            rule::L0_ONTOLOGY,
            Some(AxiomId::S1),
            "world / ontology",
            "L0 profile requires world identity and ontology.",
        ));
    }
    if !context.actions.is_empty() || !context.observers.is_empty() {
        violations.push(Violation::error(
            rule::L0_NO_DYNAMICS,
            Some(AxiomId::S4),
            "actions / observers",
            "L0 profile MUST NOT declare actions or observers.",
        ));
    }
    violations
}

/// L1 — Causal. Explicit actions; still no observers.
pub fn l1_causal(context: &SemanticContext) -> Vec<Violation> {
    if context.profile.declared() != Some(Profile::L1) {
        return Vec::new();
    }
    let mut violations = Vec::new();
    if context.actions.is_empty() {
        violations.push(Violation::error(
            rule::L1_ACTIONS,
            Some(AxiomId::S5),
            "actions",
            "L1 profile requires declared actions.",
        ));
    }
    if !context.observers.is_empty() {
        violations.push(Violation::error(
            rule::L1_NO_OBSERVERS,
            Some(AxiomId::S9),
            "observers",
            "L1 profile MUST NOT declare observers.",
        ));
    }
    violations
}

/// L2 — Sensing. Explicit observers, each with a sensing boundary.
pub fn l2_sensing(context: &SemanticContext) -> Vec<Violation> {
    if context.profile.declared() != Some(Profile::L2) {
        return Vec::new();
    }
    let mut violations = Vec::new();
    if context.observers.is_empty() {
        violations.push(Violation::error(
            rule::L2_OBSERVERS,
            Some(AxiomId::S9),
            "observers",
            "L2 profile requires observers.",
        ));
    }
    for observer in context.observers.values() {
        if observer.boundary.is_none() {
            violations.push(Violation::error(
                rule::L2_BOUNDARY,
                Some(AxiomId::S12),
                format!("observers[{}].boundary", observer.name),
                "L2 observers MUST declare sensing boundary.",
            ));
        }
    }
    violations
}

/// L3 — Numerical. Full numerical-uncertainty discipline: the unknown
/// sentinel is no longer an acceptable uncertainty anywhere.
pub fn l3_numerical(context: &SemanticContext) -> Vec<Violation> {
    if context.profile.declared() != Some(Profile::L3) {
        return Vec::new();
    }
    let mut violations = Vec::new();
    for (key, quantity) in &context.quantities {
        if quantity.uncertainty == NumericField::Unknown {
            violations.push(Violation::error(
                rule::L3_UNCERTAINTY,
                Some(AxiomId::S16),
                key.clone(),
                "L3 profile requires explicit numerical uncertainty.",
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
    fn l0_forbids_dynamics() {
        let context = context_for(json!({
            "profile": "L0",
            "world": {"id": "550e8400-e29b-41d4-a716-446655440000"},
            "ontology": {"entities": ["position"]},
            "actions": [{"name": "move", "parameters": {}, "stochastic": false}]
        }));
        let violations = l0_ontology(&context);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, rule::L0_NO_DYNAMICS);
    }

    #[test]
    fn l0_requires_identity_and_ontology() {
        let context = context_for(json!({"profile": "L0", "world": {"id": ""}, "ontology": {}}));
        let violations = l0_ontology(&context);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, rule::L0_ONTOLOGY);
    }

    #[test]
    fn l1_requires_actions_and_forbids_observers() {
        let context = context_for(json!({
            "profile": "L1",
            "world": {"id": "550e8400-e29b-41d4-a716-446655440000"},
            "ontology": {"entities": ["position"]},
            "observers": [{
                "name": "camera",
                "operator": "pinhole",
                "boundary": "fov",
                "noise": {"value": 0.5, "unit": "pixel", "uncertainty": 1.0, "provenance": "sensor"}
            }]
        }));
        let violations = l1_causal(&context);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.rule == rule::L1_ACTIONS));
        assert!(violations.iter().any(|v| v.rule == rule::L1_NO_OBSERVERS));
    }

    #[test]
    fn l2_requires_observers_with_boundaries() {
        let empty = context_for(json!({
            "profile": "L2",
            "world": {"id": "550e8400-e29b-41d4-a716-446655440000"},
            "ontology": {"entities": ["position"]}
        }));
        let violations = l2_sensing(&empty);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, rule::L2_OBSERVERS);

        let boundaryless = context_for(json!({
            "profile": "L2",
            "world": {"id": "550e8400-e29b-41d4-a716-446655440000"},
            "ontology": {"entities": ["position"]},
            "observers": [{
                "name": "camera",
                "operator": "pinhole",
                "noise": {"value": 0.5, "unit": "pixel", "uncertainty": 1.0, "provenance": "sensor"}
            }]
        }));
        let violations = l2_sensing(&boundaryless);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, rule::L2_BOUNDARY);
        assert_eq!(violations[0].path, "observers[camera].boundary");
    }

    #[test]
    fn l3_forbids_unknown_uncertainty() {
        let context = context_for(json!({
            "profile": "L3",
            "world": {"id": "550e8400-e29b-41d4-a716-446655440000"},
            "ontology": {"entities": ["position"]},
            "actions": [{
                "name": "move",
                "parameters": {"dx": {"value": 1.0, "unit": "meter", "uncertainty": "unknown", "provenance": "control"}},
                "stochastic": false
            }]
        }));
        let violations = l3_numerical(&context);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "action:move:dx");
    }

    #[test]
    fn profile_rules_fire_only_for_their_declared_profile() {
        let l2 = context_for(json!({
            "profile": "L2",
            "world": {"id": "550e8400-e29b-41d4-a716-446655440000"},
            "ontology": {"entities": ["position"]},
            "actions": [{"name": "move", "parameters": {}, "stochastic": false}]
        }));
        assert!(l0_ontology(&l2).is_empty());
        assert!(l1_causal(&l2).is_empty());
        assert!(l3_numerical(&l2).is_empty());

        let undeclared = context_for(json!({"world": {"id": "x"}, "ontology": {}}));
        assert!(l0_ontology(&undeclared).is_empty());
        assert!(l1_causal(&undeclared).is_empty());
        assert!(l2_sensing(&undeclared).is_empty());
        assert!(l3_numerical(&undeclared).is_empty());

        let unrecognized = context_for(json!({"profile": "L9", "world": {"id": "x"}, "ontology": {}}));
        assert!(l0_ontology(&unrecognized).is_empty());
        assert!(l2_sensing(&unrecognized).is_empty());
    }
}
