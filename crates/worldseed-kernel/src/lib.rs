//! # WorldSeed Kernel
//!
//! The semantic core of WorldSeed Lint: a strict in-memory model of a
//! declared world and the deterministic compliance report over it.
//!
//! The kernel never repairs, infers, or guesses. Every absent or
//! unknown value in a manifest remains observably absent or unknown
//! through the whole pipeline.
//!
//! ## Architecture
//!
//! ```text
//! raw manifest (serde_json::Value)
//!     │
//! build_context            ← pure constructor, fail-soft per item
//!     │
//! SemanticContext          ← world, ontology, actions, observers,
//!     │                      quantity registry, degradation graph
//! rule execution           ← worldseed-rules, pure checking functions
//!     │
//! Vec<Violation>
//!     │
//! generate_report          ← deterministic sort + verdict
//!     │
//! Report                   ← COMPLIANT / NON-COMPLIANT / BLOCKED
//! ```

pub mod context;
pub mod degradation;
pub mod error;
pub mod quantity;
pub mod report;
pub mod violation;

pub use context::{
    Action, Boundary, MalformedDeclaration, Observer, Ontology, Profile, ProfileDeclaration,
    SemanticContext, WorldIdentity, build_context,
};
pub use degradation::{DegradationEdge, DegradationGraph};
pub use error::BuildError;
pub use quantity::{NumericField, Quantity};
pub use report::{Compliance, Report, Summary, Verdict, generate_report};
pub use violation::{AxiomId, Severity, Violation, blocking_rule};
