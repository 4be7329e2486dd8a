//! # WorldSeed Rules
//!
//! The rule catalog and its execution harness: 19 axiom checks (S1–S19)
//! plus feature, consistency, and profile rule families, all with the
//! same contract — `fn(&SemanticContext) -> Vec<Violation>`, pure,
//! read-only, returning non-compliance as data.
//!
//! The registry is an explicitly constructed, immutable table built
//! once and passed into the executor. Nothing here is resolved
//! dynamically and nothing is mutated at runtime; tests may construct
//! fake registries through [`RuleRegistry::from_parts`].

pub mod axioms;
pub mod consistency;
pub mod features;
pub mod profiles;

use serde_json::Value;
use worldseed_kernel::{
    AxiomId, Report, SemanticContext, Violation, blocking_rule, build_context, generate_report,
};

/// The checking-function contract shared by every rule family.
pub type CheckFn = fn(&SemanticContext) -> Vec<Violation>;

/// Rule identifier for declarations the builder dropped; only the
/// strict registry surfaces these.
pub const MALFORMED_DECLARATION_RULE: &str = "CONTEXT-MALFORMED-DECLARATION";

/// Read-only mapping from axiom identifier to its one canonical rule
/// identifier. Fixed for the process lifetime; checking functions must
/// not re-derive axiom semantics from anywhere but this table.
pub const AXIOM_RULE_TABLE: [(AxiomId, &str); 19] = [
    (AxiomId::S1, axioms::rule::S1_WORLD_IDENTITY),
    (AxiomId::S2, axioms::rule::S2_STATE_INDEPENDENCE),
    (AxiomId::S3, axioms::rule::S3_EXPLICIT_STATE),
    (AxiomId::S4, axioms::rule::S4_NO_SPONTANEOUS_CHANGE),
    (AxiomId::S5, axioms::rule::S5_ACTION_COMPLETENESS),
    (AxiomId::S6, axioms::rule::S6_ACTION_SEMANTICS),
    (AxiomId::S7, axioms::rule::S7_ACTION_DETERMINISM),
    (AxiomId::S8, axioms::rule::S8_OBSERVER_NON_INTERVENTION),
    (AxiomId::S9, axioms::rule::S9_EXPLICIT_OBSERVER),
    (AxiomId::S10, axioms::rule::S10_OBSERVER_STABILITY),
    (AxiomId::S11, axioms::rule::S11_OBSERVATION_SEMANTICS),
    (AxiomId::S12, axioms::rule::S12_SENSING_BOUNDARY),
    (AxiomId::S13, axioms::rule::S13_BOUNDARY_RESPECT),
    (AxiomId::S14, axioms::rule::S14_EXPLICIT_IRREVERSIBILITY),
    (AxiomId::S15, axioms::rule::S15_NO_IMPLICIT_RECONSTRUCTION),
    (AxiomId::S16, axioms::rule::S16_NUMERICAL_SEMANTICS),
    (AxiomId::S17, axioms::rule::S17_NO_IMPLICIT_CASTING),
    (AxiomId::S18, axioms::rule::S18_CLAIM_SCOPE),
    (AxiomId::S19, axioms::rule::S19_DISTINGUISHABILITY),
];

/// Immutable, ordered table of checking functions.
///
/// Axiom rules run first in ascending numeric order, then the trailing
/// families in fixed order: features, consistency, profiles. Ordering
/// affects only emission order before the report's deterministic sort,
/// but it is reproduced exactly so partial debugging output is stable
/// across runs and implementations.
pub struct RuleRegistry {
    axiom_rules: Vec<(AxiomId, CheckFn)>,
    trailing_rules: Vec<(&'static str, CheckFn)>,
}

impl RuleRegistry {
    /// The reference catalog: silent-drop semantics for malformed
    /// declarations.
    pub fn standard() -> Self {
        Self {
            axiom_rules: vec![
                (AxiomId::S1, axioms::s1_world_identity as CheckFn),
                (AxiomId::S2, axioms::s2_state_independence),
                (AxiomId::S3, axioms::s3_explicit_state),
                (AxiomId::S4, axioms::s4_no_spontaneous_change),
                (AxiomId::S5, axioms::s5_action_completeness),
                (AxiomId::S6, axioms::s6_action_semantics),
                (AxiomId::S7, axioms::s7_action_determinism),
                (AxiomId::S8, axioms::s8_observer_non_intervention),
                (AxiomId::S9, axioms::s9_explicit_observer),
                (AxiomId::S10, axioms::s10_observer_stability),
                (AxiomId::S11, axioms::s11_observation_semantics),
                (AxiomId::S12, axioms::s12_sensing_boundary),
                (AxiomId::S13, axioms::s13_boundary_respect),
                (AxiomId::S14, axioms::s14_explicit_irreversibility),
                (AxiomId::S15, axioms::s15_no_implicit_reconstruction),
                (AxiomId::S16, axioms::s16_numerical_semantics),
                (AxiomId::S17, axioms::s17_no_implicit_casting),
                (AxiomId::S18, axioms::s18_claim_scope),
                (AxiomId::S19, axioms::s19_distinguishability),
            ],
            trailing_rules: vec![
                ("feature.actions", features::action_parameters as CheckFn),
                ("feature.observers", features::observer_operator),
                ("feature.sensing_boundary", features::sensing_boundary),
                ("feature.numerical", features::numerical_semantics),
                ("feature.irreversibility", features::irreversibility),
                ("consistency.provenance", consistency::provenance),
                ("consistency.uncertainty", consistency::uncertainty),
                ("consistency.units", consistency::units),
                ("profile.l0", profiles::l0_ontology),
                ("profile.l1", profiles::l1_causal),
                ("profile.l2", profiles::l2_sensing),
                ("profile.l3", profiles::l3_numerical),
            ],
        }
    }

    /// The standard catalog plus reporting of declarations the builder
    /// dropped as malformed.
    pub fn strict() -> Self {
        let mut registry = Self::standard();
        registry
            .trailing_rules
            .push(("context.integrity", malformed_declarations));
        registry
    }

    /// Assemble a registry from explicit parts. Intended for tests that
    /// need a fake rule set.
    pub fn from_parts(
        axiom_rules: Vec<(AxiomId, CheckFn)>,
        trailing_rules: Vec<(&'static str, CheckFn)>,
    ) -> Self {
        Self {
            axiom_rules,
            trailing_rules,
        }
    }

    /// Axiom identifiers in registration order.
    pub fn axiom_ids(&self) -> Vec<AxiomId> {
        self.axiom_rules.iter().map(|(axiom, _)| *axiom).collect()
    }

    /// Total number of registered checking functions.
    pub fn len(&self) -> usize {
        self.axiom_rules.len() + self.trailing_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axiom_rules.is_empty() && self.trailing_rules.is_empty()
    }

    /// Execute every registered checking function in order and
    /// concatenate the findings. No deduplication, no severity
    /// rewriting, no catch layer: the catalog is a closed, fully
    /// tested set and a panicking check would be a harness bug, not a
    /// lint outcome.
    pub fn run(&self, context: &SemanticContext) -> Vec<Violation> {
        let mut violations = Vec::new();
        for (_, check) in &self.axiom_rules {
            violations.extend(check(context));
        }
        for (_, check) in &self.trailing_rules {
            violations.extend(check(context));
        }
        violations
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Strict-registry rule: surface every declaration the builder dropped
/// under its fail-soft policy, at the dropped item's manifest path.
pub fn malformed_declarations(context: &SemanticContext) -> Vec<Violation> {
    context
        .malformed
        .iter()
        .map(|dropped| {
            Violation::error(
                MALFORMED_DECLARATION_RULE,
                None,
                dropped.path.clone(),
                format!(
                    "Declaration dropped during context construction: {}.",
                    dropped.reason
                ),
            )
        })
        .collect()
}

/// Run the whole pipeline over one raw manifest: build the context,
/// execute the registry, and aggregate the report. A construction
/// failure becomes a single synthetic blocking violation rather than a
/// raised fault, so callers always receive the same report shape.
pub fn lint_manifest(manifest: &Value, registry: &RuleRegistry) -> Report {
    match build_context(manifest) {
        Ok(context) => generate_report(registry.run(&context)),
        Err(error) => generate_report(vec![Violation::error(
            blocking_rule::CONSTRUCTION_ERROR,
            None,
            "manifest",
            format!("Failed to construct semantic context: {error}."),
        )]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use worldseed_kernel::{Severity, Verdict};

    #[test]
    fn registry_holds_all_axioms_in_ascending_order() {
        let registry = RuleRegistry::standard();
        assert_eq!(registry.axiom_ids(), AxiomId::ALL.to_vec());
        assert_eq!(registry.len(), 19 + 12);
    }

    #[test]
    fn axiom_rule_table_matches_registry_order() {
        assert_eq!(AXIOM_RULE_TABLE.len(), 19);
        let registry = RuleRegistry::standard();
        for ((table_axiom, _), registry_axiom) in
            AXIOM_RULE_TABLE.iter().zip(registry.axiom_ids())
        {
            assert_eq!(*table_axiom, registry_axiom);
        }
    }

    #[test]
    fn executor_concatenates_in_registration_order() {
        fn first(_: &SemanticContext) -> Vec<Violation> {
            vec![Violation::error("R-FIRST", None, "a", "first")]
        }
        fn second(_: &SemanticContext) -> Vec<Violation> {
            vec![Violation::error("R-SECOND", None, "b", "second")]
        }

        let registry = RuleRegistry::from_parts(
            vec![(AxiomId::S1, first as CheckFn)],
            vec![("fake.second", second as CheckFn)],
        );
        let context =
            build_context(&json!({"world": {"id": "x"}, "ontology": {}})).unwrap();
        let violations = registry.run(&context);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].rule, "R-FIRST");
        assert_eq!(violations[1].rule, "R-SECOND");
    }

    #[test]
    fn standard_registry_keeps_malformed_drops_silent() {
        let manifest = json!({
            "world": {"id": "550e8400-e29b-41d4-a716-446655440000"},
            "ontology": {"entities": ["position"]},
            "actions": [{"parameters": {}}]
        });
        let report = lint_manifest(&manifest, &RuleRegistry::standard());
        assert!(
            !report
                .violations
                .iter()
                .any(|v| v.rule == MALFORMED_DECLARATION_RULE)
        );
    }

    #[test]
    fn strict_registry_reports_malformed_drops() {
        let manifest = json!({
            "world": {"id": "550e8400-e29b-41d4-a716-446655440000"},
            "ontology": {"entities": ["position"]},
            "actions": [{"parameters": {}}]
        });
        let report = lint_manifest(&manifest, &RuleRegistry::strict());
        let dropped: Vec<_> = report
            .violations
            .iter()
            .filter(|v| v.rule == MALFORMED_DECLARATION_RULE)
            .collect();
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].path, "actions[0]");
        assert_eq!(dropped[0].severity, Severity::Error);
        assert_eq!(dropped[0].axiom, None);
        assert_eq!(report.verdict, Verdict::NonCompliant);
    }

    #[test]
    fn construction_failure_blocks_with_single_violation() {
        let report = lint_manifest(&json!("not an object"), &RuleRegistry::standard());
        assert_eq!(report.verdict, Verdict::Blocked);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, blocking_rule::CONSTRUCTION_ERROR);
        assert_eq!(report.violations[0].axiom, None);
        assert_eq!(report.violations[0].path, "manifest");
    }

    #[test]
    fn lint_output_is_deterministic_across_runs() {
        let manifest = json!({
            "version": "1.0.0",
            "profile": "L2",
            "world": {"id": "not-a-uuid"},
            "ontology": {"entities": []},
            "observers": [{
                "name": "camera",
                "noise": {"value": "unknown", "unit": "", "provenance": ""}
            }]
        });
        let registry = RuleRegistry::standard();
        let first = serde_json::to_string(&lint_manifest(&manifest, &registry)).unwrap();
        let second = serde_json::to_string(&lint_manifest(&manifest, &registry)).unwrap();
        assert_eq!(first, second);
    }
}
