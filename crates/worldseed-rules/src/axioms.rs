//! The 19 axiom checking functions, S1 through S19.
//!
//! Each function enforces exactly one axiom's check contract and is
//! pure: it reads the context, never mutates it, never performs I/O,
//! and expresses non-compliance only as returned violations. Several
//! axioms are enforced by the shape of the semantic model itself; their
//! checking functions legitimately return nothing, forever, and say so.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use worldseed_kernel::{AxiomId, NumericField, Profile, SemanticContext, Violation};

/// Rule identifiers, one per axiom.
pub mod rule {
    pub const S1_WORLD_IDENTITY: &str = "AXIOM-S1-WORLD-IDENTITY";
    pub const S2_STATE_INDEPENDENCE: &str = "AXIOM-S2-STATE-INDEPENDENCE";
    pub const S3_EXPLICIT_STATE: &str = "AXIOM-S3-EXPLICIT-STATE";
    pub const S4_NO_SPONTANEOUS_CHANGE: &str = "AXIOM-S4-NO-SPONTANEOUS-CHANGE";
    pub const S5_ACTION_COMPLETENESS: &str = "AXIOM-S5-ACTION-COMPLETENESS";
    pub const S6_ACTION_SEMANTICS: &str = "AXIOM-S6-ACTION-SEMANTICS";
    pub const S7_ACTION_DETERMINISM: &str = "AXIOM-S7-ACTION-DETERMINISM";
    pub const S8_OBSERVER_NON_INTERVENTION: &str = "AXIOM-S8-OBSERVER-NON-INTERVENTION";
    pub const S9_EXPLICIT_OBSERVER: &str = "AXIOM-S9-EXPLICIT-OBSERVER";
    pub const S10_OBSERVER_STABILITY: &str = "AXIOM-S10-OBSERVER-STABILITY";
    pub const S11_OBSERVATION_SEMANTICS: &str = "AXIOM-S11-OBSERVATION-SEMANTICS";
    pub const S12_SENSING_BOUNDARY: &str = "AXIOM-S12-SENSING-BOUNDARY";
    pub const S13_BOUNDARY_RESPECT: &str = "AXIOM-S13-BOUNDARY-RESPECT";
    pub const S14_EXPLICIT_IRREVERSIBILITY: &str = "AXIOM-S14-EXPLICIT-IRREVERSIBILITY";
    pub const S15_NO_IMPLICIT_RECONSTRUCTION: &str = "AXIOM-S15-NO-IMPLICIT-RECONSTRUCTION";
    pub const S16_NUMERICAL_SEMANTICS: &str = "AXIOM-S16-NUMERICAL-SEMANTICS";
    pub const S17_NO_IMPLICIT_CASTING: &str = "AXIOM-S17-NO-IMPLICIT-CASTING";
    pub const S18_CLAIM_SCOPE: &str = "AXIOM-S18-CLAIM-SCOPE";
    pub const S19_DISTINGUISHABILITY: &str = "AXIOM-S19-DISTINGUISHABILITY";
}

fn uuid_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .expect("uuid regex must compile")
    })
}

/// S1 — World Identity. A manifest declares a globally unique,
/// immutable world identity in canonical UUID form.
pub fn s1_world_identity(context: &SemanticContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    if context.world.id.is_empty() {
        violations.push(Violation::error(
            rule::S1_WORLD_IDENTITY,
            Some(AxiomId::S1),
            "world.id",
            "world.id MUST be non-empty.",
        ));
    } else if !uuid_re().is_match(&context.world.id) {
        violations.push(Violation::error(
            rule::S1_WORLD_IDENTITY,
            Some(AxiomId::S1),
            "world.id",
            "world.id MUST be a valid UUID format.",
        ));
    }
    violations
}

/// S2 — State Independence from Observation.
///
/// Structurally empty: the ontology type carries only entity names and
/// cannot reference observers or observation outputs, so the violation
/// is unrepresentable in this context shape.
pub fn s2_state_independence(_context: &SemanticContext) -> Vec<Violation> {
    Vec::new()
}

/// S3 — Explicit State Declaration. All world state dimensions must be
/// explicitly declared.
pub fn s3_explicit_state(context: &SemanticContext) -> Vec<Violation> {
    if context.ontology.entities.is_empty() {
        return vec![Violation::error(
            rule::S3_EXPLICIT_STATE,
            Some(AxiomId::S3),
            "ontology.entities",
            "Ontology MUST declare at least one state entity.",
        )];
    }
    Vec::new()
}

/// S4 — No Spontaneous State Change.
///
/// Structurally empty: state change only exists as declared actions;
/// hidden mutation paths are unrepresentable.
pub fn s4_no_spontaneous_change(_context: &SemanticContext) -> Vec<Violation> {
    Vec::new()
}

/// S5 — Action Completeness. Profiles with causal dynamics require at
/// least one declared action.
pub fn s5_action_completeness(context: &SemanticContext) -> Vec<Violation> {
    let requires_actions = context
        .profile
        .declared()
        .is_some_and(|profile| profile.at_least(Profile::L1));
    if requires_actions && context.actions.is_empty() {
        return vec![Violation::error(
            rule::S5_ACTION_COMPLETENESS,
            Some(AxiomId::S5),
            "actions",
            "Profile requires at least one declared action.",
        )];
    }
    Vec::new()
}

/// S6 — Action Semantics. Every action parameter declares an explicit
/// unit and a provenance.
pub fn s6_action_semantics(context: &SemanticContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    for action in context.actions.values() {
        for (pname, quantity) in &action.parameters {
            if !quantity.has_unit() {
                violations.push(Violation::error(
                    rule::S6_ACTION_SEMANTICS,
                    Some(AxiomId::S6),
                    format!("actions[{}].parameters[{}].unit", action.name, pname),
                    "Action parameter missing unit.",
                ));
            }
            if quantity.provenance.is_none() {
                violations.push(Violation::error(
                    rule::S6_ACTION_SEMANTICS,
                    Some(AxiomId::S6),
                    format!("actions[{}].parameters[{}].provenance", action.name, pname),
                    "Action parameter missing provenance.",
                ));
            }
        }
    }
    violations
}

/// S7 — Action Determinism Declaration. Actions are deterministic
/// unless stochasticity is explicitly declared; silence is a violation,
/// never a default.
pub fn s7_action_determinism(context: &SemanticContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    for action in context.actions.values() {
        if action.stochastic.is_none() {
            violations.push(Violation::error(
                rule::S7_ACTION_DETERMINISM,
                Some(AxiomId::S7),
                format!("actions[{}].stochastic", action.name),
                "Action stochasticity MUST be explicitly declared.",
            ));
        }
    }
    violations
}

/// S8 — Observer Non-Intervention.
///
/// Structurally empty: no mutation API exists on the observer model or
/// anything it references.
pub fn s8_observer_non_intervention(_context: &SemanticContext) -> Vec<Violation> {
    Vec::new()
}

/// S9 — Explicit Observer Definition. Sensing profiles require at
/// least one declared observer.
pub fn s9_explicit_observer(context: &SemanticContext) -> Vec<Violation> {
    let requires_observers = context
        .profile
        .declared()
        .is_some_and(|profile| profile.at_least(Profile::L2));
    if requires_observers && context.observers.is_empty() {
        return vec![Violation::error(
            rule::S9_EXPLICIT_OBSERVER,
            Some(AxiomId::S9),
            "observers",
            "Profile requires explicit observers.",
        )];
    }
    Vec::new()
}

/// S10 — Observer Stability.
///
/// Structurally empty: observer drift is only expressible through
/// declared actions, never as hidden recalibration.
pub fn s10_observer_stability(_context: &SemanticContext) -> Vec<Violation> {
    Vec::new()
}

/// S11 — Observation Operator Semantics. Each observer declares its
/// operator and its noise uncertainty. The two undeclared-uncertainty
/// states stay distinguishable in the messages.
pub fn s11_observation_semantics(context: &SemanticContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    for observer in context.observers.values() {
        if observer
            .operator
            .as_deref()
            .is_none_or(|operator| operator.is_empty())
        {
            violations.push(Violation::error(
                rule::S11_OBSERVATION_SEMANTICS,
                Some(AxiomId::S11),
                format!("observers[{}].operator", observer.name),
                "Observer operator MUST be declared.",
            ));
        }
        match observer.noise.uncertainty {
            NumericField::Unknown => violations.push(Violation::error(
                rule::S11_OBSERVATION_SEMANTICS,
                Some(AxiomId::S11),
                format!("observers[{}].noise.uncertainty", observer.name),
                "Observer uncertainty MUST NOT be implicit.",
            )),
            NumericField::Absent => violations.push(Violation::error(
                rule::S11_OBSERVATION_SEMANTICS,
                Some(AxiomId::S11),
                format!("observers[{}].noise.uncertainty", observer.name),
                "Observer uncertainty MUST be declared.",
            )),
            NumericField::Known(_) => {}
        }
    }
    violations
}

/// S12 — Sensing Boundary Declaration. Each observer declares a
/// sensing boundary.
pub fn s12_sensing_boundary(context: &SemanticContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    for observer in context.observers.values() {
        if observer.boundary.is_none() {
            violations.push(Violation::error(
                rule::S12_SENSING_BOUNDARY,
                Some(AxiomId::S12),
                format!("observers[{}].boundary", observer.name),
                "Observer MUST declare sensing boundary.",
            ));
        }
    }
    violations
}

/// S13 — Boundary Respect.
///
/// Structurally empty: claims live outside the manifest, so inference
/// beyond a boundary is unrepresentable here.
pub fn s13_boundary_respect(_context: &SemanticContext) -> Vec<Violation> {
    Vec::new()
}

/// S14 — Explicit Irreversibility. An edge declared irreversible must
/// not have a declared inverse transformation.
pub fn s14_explicit_irreversibility(context: &SemanticContext) -> Vec<Violation> {
    let graph = &context.degradation_graph;
    let mut violations = Vec::new();
    for edge in graph.edges.iter().filter(|edge| edge.irreversible) {
        if graph.has_edge(&edge.target, &edge.source) {
            violations.push(Violation::error(
                rule::S14_EXPLICIT_IRREVERSIBILITY,
                Some(AxiomId::S14),
                edge.path(),
                "Irreversible transformation MUST NOT declare an inverse transformation.",
            ));
        }
    }
    violations
}

/// S15 — No Implicit Reconstruction. A distinction destroyed on an
/// edge must not be destroyed again downstream: destroying it twice
/// implies it was reconstructed in between.
pub fn s15_no_implicit_reconstruction(context: &SemanticContext) -> Vec<Violation> {
    let graph = &context.degradation_graph;
    let mut findings: BTreeSet<(String, String)> = BTreeSet::new();
    for (i, edge) in graph.edges.iter().enumerate() {
        if edge.destroyed_distinctions.is_empty() {
            continue;
        }
        let downstream = graph.reachable_from(&edge.target);
        for (j, later) in graph.edges.iter().enumerate() {
            if i == j || !downstream.contains(&later.source) {
                continue;
            }
            for distinction in edge
                .destroyed_distinctions
                .intersection(&later.destroyed_distinctions)
            {
                findings.insert((later.path(), distinction.clone()));
            }
        }
    }
    findings
        .into_iter()
        .map(|(path, distinction)| {
            Violation::error(
                rule::S15_NO_IMPLICIT_RECONSTRUCTION,
                Some(AxiomId::S15),
                path,
                format!("Destroyed distinction {distinction} MUST NOT reappear downstream."),
            )
        })
        .collect()
}

/// S16 — Numerical Type Semantics. Every registered quantity carries
/// an explicit unit.
pub fn s16_numerical_semantics(context: &SemanticContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (key, quantity) in &context.quantities {
        if quantity.unit.is_none() {
            violations.push(Violation::error(
                rule::S16_NUMERICAL_SEMANTICS,
                Some(AxiomId::S16),
                key.clone(),
                "Numerical quantity missing unit.",
            ));
        }
    }
    violations
}

/// S17 — No Implicit Casting.
///
/// Structurally empty: the typed quantity model admits no silent
/// conversion between numeric states.
pub fn s17_no_implicit_casting(_context: &SemanticContext) -> Vec<Violation> {
    Vec::new()
}

/// S18 — Claim Scope Limitation.
///
/// Structurally empty: learning claims live outside the manifest;
/// profile enforcement covers the declared scope.
pub fn s18_claim_scope(_context: &SemanticContext) -> Vec<Violation> {
    Vec::new()
}

/// S19 — Distinguishability Preservation. The degradation graph must
/// be acyclic with respect to irreversibility: an irreversible cycle
/// would silently restore destroyed distinguishability.
pub fn s19_distinguishability(context: &SemanticContext) -> Vec<Violation> {
    if context.degradation_graph.has_irreversible_cycle() {
        return vec![Violation::error(
            rule::S19_DISTINGUISHABILITY,
            Some(AxiomId::S19),
            "degradation",
            "Degradation MUST be acyclic with respect to irreversibility.",
        )];
    }
    Vec::new()
}
