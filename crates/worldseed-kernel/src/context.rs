//! Canonical semantic world representation and its builder.
//!
//! All rules operate exclusively on the [`SemanticContext`] built here;
//! raw manifests are never handed to rules directly. The builder is a
//! pure constructor: missing information stays missing, declared
//! `"unknown"` stays unknown, no defaults are introduced, and no
//! relationships are inferred beyond those explicitly declared.
//!
//! Failure isolation is two-tier. A malformed nested declaration (an
//! action, an observer, a parameter, an edge) is dropped from the
//! context and recorded in [`SemanticContext::malformed`] so one bad
//! item never blocks validation of the rest. Only top-level structural
//! impossibility aborts construction with a [`BuildError`].

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::degradation::{DegradationEdge, DegradationGraph};
use crate::error::BuildError;
use crate::quantity::{NumericField, Quantity};

/// World identity descriptor. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldIdentity {
    pub id: String,
    pub description: Option<String>,
}

/// Ontological declaration of world state dimensions.
///
/// Independent of observation: nothing here references observers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ontology {
    pub entities: BTreeSet<String>,
}

/// World state modification operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub name: String,
    pub parameters: BTreeMap<String, Quantity>,
    /// `None` when the manifest never declared stochasticity. The
    /// builder does not default this; S7 reports the omission.
    pub stochastic: Option<bool>,
}

/// Sensing boundary descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    pub description: String,
}

/// Observation operator. No mutation API exists on this type or on
/// anything it references: observers structurally cannot modify world
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct Observer {
    pub name: String,
    pub operator: Option<String>,
    pub boundary: Option<Boundary>,
    pub noise: Quantity,
}

/// Compliance profile tiers, ordered L0 < L1 < L2 < L3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Profile {
    L0,
    L1,
    L2,
    L3,
}

impl Profile {
    /// Returns true if `self` requires at least everything `other` does.
    pub fn at_least(self, other: Self) -> bool {
        self >= other
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::L0 => "L0",
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::L3 => "L3",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L0" => Ok(Self::L0),
            "L1" => Ok(Self::L1),
            "L2" => Ok(Self::L2),
            "L3" => Ok(Self::L3),
            _ => Err(format!("unknown profile: {s}")),
        }
    }
}

/// What the manifest said about its profile, without collapsing the
/// distinct states: a recognized tier, an unrecognized declaration
/// (kept verbatim for diagnostics), or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileDeclaration {
    Declared(Profile),
    Unrecognized(String),
    Absent,
}

impl ProfileDeclaration {
    /// The recognized profile tier, if one was declared.
    pub fn declared(&self) -> Option<Profile> {
        match self {
            Self::Declared(profile) => Some(*profile),
            Self::Unrecognized(_) | Self::Absent => None,
        }
    }
}

/// Record of a nested declaration the builder dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedDeclaration {
    pub path: String,
    pub reason: String,
}

impl MalformedDeclaration {
    fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Canonical semantic snapshot of one manifest.
///
/// Built once per manifest, read-only thereafter, and discarded after
/// rule execution. Every cross-reference resolves within the context.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticContext {
    pub spec_version: Option<String>,
    pub profile: ProfileDeclaration,
    pub world: WorldIdentity,
    pub ontology: Ontology,
    pub actions: BTreeMap<String, Action>,
    pub observers: BTreeMap<String, Observer>,
    /// Flat registry of every quantity reachable from actions and
    /// observers, keyed `action:<name>:<param>` / `observer:<name>:noise`.
    pub quantities: BTreeMap<String, Quantity>,
    pub degradation_graph: DegradationGraph,
    /// Declarations dropped by the fail-soft policy, in manifest order.
    pub malformed: Vec<MalformedDeclaration>,
}

/// Construct the semantic context from a raw manifest value.
///
/// Fails only when the manifest root, `world`, or `ontology` cannot be
/// interpreted as the object shape they must have; everything else is
/// interpreted defensively field by field.
pub fn build_context(manifest: &Value) -> Result<SemanticContext, BuildError> {
    let Some(root) = manifest.as_object() else {
        return Err(BuildError::ManifestNotAnObject);
    };

    let mut malformed = Vec::new();

    let spec_version = root
        .get("version")
        .and_then(Value::as_str)
        .map(str::to_string);
    let profile = parse_profile(root.get("profile"));
    let world = build_world(root.get("world"))?;
    let ontology = build_ontology(root.get("ontology"), &mut malformed)?;
    let actions = build_actions(root.get("actions"), &mut malformed);
    let observers = build_observers(root.get("observers"), &mut malformed);
    let quantities = build_quantity_registry(&actions, &observers);
    let degradation_graph = build_degradation(root.get("degradation"), &mut malformed);

    Ok(SemanticContext {
        spec_version,
        profile,
        world,
        ontology,
        actions,
        observers,
        quantities,
        degradation_graph,
        malformed,
    })
}

fn parse_profile(raw: Option<&Value>) -> ProfileDeclaration {
    match raw {
        None => ProfileDeclaration::Absent,
        Some(Value::String(s)) => match s.parse::<Profile>() {
            Ok(profile) => ProfileDeclaration::Declared(profile),
            Err(_) => ProfileDeclaration::Unrecognized(s.clone()),
        },
        Some(other) => ProfileDeclaration::Unrecognized(other.to_string()),
    }
}

fn build_world(raw: Option<&Value>) -> Result<WorldIdentity, BuildError> {
    let Some(raw) = raw else {
        return Ok(WorldIdentity {
            id: String::new(),
            description: None,
        });
    };
    let Some(world) = raw.as_object() else {
        return Err(BuildError::WorldNotAnObject);
    };
    Ok(WorldIdentity {
        id: world
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        description: world
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

fn build_ontology(
    raw: Option<&Value>,
    malformed: &mut Vec<MalformedDeclaration>,
) -> Result<Ontology, BuildError> {
    let Some(raw) = raw else {
        return Ok(Ontology::default());
    };
    let Some(ontology) = raw.as_object() else {
        return Err(BuildError::OntologyNotAnObject);
    };
    let mut entities = BTreeSet::new();
    match ontology.get("entities") {
        None => {}
        Some(Value::Array(items)) => {
            for (idx, item) in items.iter().enumerate() {
                let Some(entity) = item.as_str() else {
                    malformed.push(MalformedDeclaration::new(
                        format!("ontology.entities[{idx}]"),
                        "must be a string",
                    ));
                    continue;
                };
                entities.insert(entity.to_string());
            }
        }
        Some(_) => return Err(BuildError::OntologyEntitiesNotAnArray),
    }
    Ok(Ontology { entities })
}

fn build_actions(
    raw: Option<&Value>,
    malformed: &mut Vec<MalformedDeclaration>,
) -> BTreeMap<String, Action> {
    let mut actions = BTreeMap::new();
    let Some(raw) = raw else {
        return actions;
    };
    let Some(items) = raw.as_array() else {
        malformed.push(MalformedDeclaration::new("actions", "must be an array"));
        return actions;
    };

    for (idx, item) in items.iter().enumerate() {
        let item_path = format!("actions[{idx}]");
        let Some(action) = item.as_object() else {
            malformed.push(MalformedDeclaration::new(item_path, "must be an object"));
            continue;
        };
        let Some(name) = action
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
        else {
            malformed.push(MalformedDeclaration::new(
                item_path,
                "missing required name",
            ));
            continue;
        };
        if actions.contains_key(name) {
            malformed.push(MalformedDeclaration::new(item_path, "duplicate action name"));
            continue;
        }

        let mut parameters = BTreeMap::new();
        match action.get("parameters") {
            None => {}
            Some(Value::Object(raw_parameters)) => {
                for (pname, raw_quantity) in raw_parameters {
                    let parameter_path = format!("actions[{name}].parameters[{pname}]");
                    match build_quantity(raw_quantity, &parameter_path) {
                        Ok(quantity) => {
                            parameters.insert(pname.clone(), quantity);
                        }
                        Err(reason) => {
                            malformed.push(MalformedDeclaration::new(parameter_path, reason));
                        }
                    }
                }
            }
            Some(_) => {
                malformed.push(MalformedDeclaration::new(
                    format!("actions[{name}].parameters"),
                    "must be an object",
                ));
                continue;
            }
        }

        let stochastic = match action.get("stochastic") {
            None => None,
            Some(Value::Bool(flag)) => Some(*flag),
            Some(_) => {
                malformed.push(MalformedDeclaration::new(
                    format!("actions[{name}].stochastic"),
                    "must be a boolean",
                ));
                None
            }
        };

        actions.insert(
            name.to_string(),
            Action {
                name: name.to_string(),
                parameters,
                stochastic,
            },
        );
    }
    actions
}

fn build_observers(
    raw: Option<&Value>,
    malformed: &mut Vec<MalformedDeclaration>,
) -> BTreeMap<String, Observer> {
    let mut observers = BTreeMap::new();
    let Some(raw) = raw else {
        return observers;
    };
    let Some(items) = raw.as_array() else {
        malformed.push(MalformedDeclaration::new("observers", "must be an array"));
        return observers;
    };

    for (idx, item) in items.iter().enumerate() {
        let item_path = format!("observers[{idx}]");
        let Some(observer) = item.as_object() else {
            malformed.push(MalformedDeclaration::new(item_path, "must be an object"));
            continue;
        };
        let Some(name) = observer
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
        else {
            malformed.push(MalformedDeclaration::new(
                item_path,
                "missing required name",
            ));
            continue;
        };
        if observers.contains_key(name) {
            malformed.push(MalformedDeclaration::new(
                item_path,
                "duplicate observer name",
            ));
            continue;
        }

        let operator = match observer.get("operator") {
            None => None,
            Some(Value::String(operator)) => Some(operator.clone()),
            Some(_) => {
                malformed.push(MalformedDeclaration::new(
                    format!("observers[{name}].operator"),
                    "must be a string",
                ));
                None
            }
        };

        let boundary = match observer.get("boundary") {
            None => None,
            Some(Value::String(description)) => Some(Boundary {
                description: description.clone(),
            }),
            Some(_) => {
                malformed.push(MalformedDeclaration::new(
                    format!("observers[{name}].boundary"),
                    "must be a string",
                ));
                None
            }
        };

        let noise_path = format!("observers[{name}].noise");
        let noise = match observer.get("noise") {
            None => Quantity {
                value: NumericField::Absent,
                unit: None,
                uncertainty: NumericField::Absent,
                provenance: None,
                path: noise_path,
            },
            Some(raw_noise) => match build_quantity(raw_noise, &noise_path) {
                Ok(noise) => noise,
                Err(reason) => {
                    malformed.push(MalformedDeclaration::new(noise_path, reason));
                    continue;
                }
            },
        };

        observers.insert(
            name.to_string(),
            Observer {
                name: name.to_string(),
                operator,
                boundary,
                noise,
            },
        );
    }
    observers
}

fn build_quantity(raw: &Value, path: &str) -> Result<Quantity, String> {
    let Some(quantity) = raw.as_object() else {
        return Err("must be an object".to_string());
    };
    Ok(Quantity {
        value: numeric_field(quantity.get("value"), "value")?,
        unit: optional_string(quantity.get("unit"), "unit")?,
        uncertainty: numeric_field(quantity.get("uncertainty"), "uncertainty")?,
        provenance: optional_string(quantity.get("provenance"), "provenance")?,
        path: path.to_string(),
    })
}

fn numeric_field(raw: Option<&Value>, field: &str) -> Result<NumericField, String> {
    match raw {
        None => Ok(NumericField::Absent),
        Some(Value::Number(number)) => number
            .as_f64()
            .map(NumericField::Known)
            .ok_or_else(|| format!("{field} is not a representable number")),
        Some(Value::String(s)) if s == "unknown" => Ok(NumericField::Unknown),
        Some(_) => Err(format!(
            "{field} must be a number or the \"unknown\" sentinel"
        )),
    }
}

fn optional_string(raw: Option<&Value>, field: &str) -> Result<Option<String>, String> {
    match raw {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(format!("{field} must be a string")),
    }
}

fn build_quantity_registry(
    actions: &BTreeMap<String, Action>,
    observers: &BTreeMap<String, Observer>,
) -> BTreeMap<String, Quantity> {
    let mut quantities = BTreeMap::new();
    for action in actions.values() {
        for (pname, quantity) in &action.parameters {
            quantities.insert(
                format!("action:{}:{}", action.name, pname),
                quantity.clone(),
            );
        }
    }
    for observer in observers.values() {
        quantities.insert(
            format!("observer:{}:noise", observer.name),
            observer.noise.clone(),
        );
    }
    quantities
}

fn build_degradation(
    raw: Option<&Value>,
    malformed: &mut Vec<MalformedDeclaration>,
) -> DegradationGraph {
    let mut graph = DegradationGraph::default();
    let Some(raw) = raw else {
        return graph;
    };
    let Some(degradation) = raw.as_object() else {
        malformed.push(MalformedDeclaration::new("degradation", "must be an object"));
        return graph;
    };

    match degradation.get("nodes") {
        None => {}
        Some(Value::Array(items)) => {
            for (idx, item) in items.iter().enumerate() {
                let Some(node) = item.as_str() else {
                    malformed.push(MalformedDeclaration::new(
                        format!("degradation.nodes[{idx}]"),
                        "must be a string",
                    ));
                    continue;
                };
                graph.nodes.insert(node.to_string());
            }
        }
        Some(_) => {
            malformed.push(MalformedDeclaration::new(
                "degradation.nodes",
                "must be an array",
            ));
        }
    }

    match degradation.get("edges") {
        None => {}
        Some(Value::Array(items)) => {
            for (idx, item) in items.iter().enumerate() {
                let edge_path = format!("degradation.edges[{idx}]");
                match build_degradation_edge(item, &edge_path, malformed) {
                    Ok(edge) => {
                        graph.nodes.insert(edge.source.clone());
                        graph.nodes.insert(edge.target.clone());
                        graph.edges.push(edge);
                    }
                    Err(reason) => {
                        malformed.push(MalformedDeclaration::new(edge_path, reason));
                    }
                }
            }
        }
        Some(_) => {
            malformed.push(MalformedDeclaration::new(
                "degradation.edges",
                "must be an array",
            ));
        }
    }

    graph
        .edges
        .sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));
    graph
}

fn build_degradation_edge(
    raw: &Value,
    edge_path: &str,
    malformed: &mut Vec<MalformedDeclaration>,
) -> Result<DegradationEdge, String> {
    let Some(edge) = raw.as_object() else {
        return Err("must be an object".to_string());
    };
    let Some(source) = edge
        .get("source")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
    else {
        return Err("missing required source".to_string());
    };
    let Some(target) = edge
        .get("target")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
    else {
        return Err("missing required target".to_string());
    };
    let Some(irreversible) = edge.get("irreversible").and_then(Value::as_bool) else {
        return Err("missing explicit irreversible flag".to_string());
    };

    let mut destroyed_distinctions = BTreeSet::new();
    match edge.get("destroyed_distinctions") {
        None => {}
        Some(Value::Array(items)) => {
            for (idx, item) in items.iter().enumerate() {
                let Some(distinction) = item.as_str() else {
                    malformed.push(MalformedDeclaration::new(
                        format!("{edge_path}.destroyed_distinctions[{idx}]"),
                        "must be a string",
                    ));
                    continue;
                };
                destroyed_distinctions.insert(distinction.to_string());
            }
        }
        Some(_) => return Err("destroyed_distinctions must be an array".to_string()),
    }

    Ok(DegradationEdge {
        source: source.to_string(),
        target: target.to_string(),
        irreversible,
        destroyed_distinctions,
    })
}
