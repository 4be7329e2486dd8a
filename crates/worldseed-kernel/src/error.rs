//! Construction-failure errors for the context builder.
//!
//! These cover only top-level structural impossibility. Everything
//! below the top level is handled by the builder's per-item fail-soft
//! policy and never raises.

/// The manifest cannot be turned into a semantic context at all.
///
/// Callers convert this into a single synthetic CONSTRUCTION-ERROR
/// violation, which forces the BLOCKED verdict.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("manifest root must be a JSON object")]
    ManifestNotAnObject,

    #[error("world must be an object when declared")]
    WorldNotAnObject,

    #[error("ontology must be an object when declared")]
    OntologyNotAnObject,

    #[error("ontology.entities must be an array when declared")]
    OntologyEntitiesNotAnArray,
}
