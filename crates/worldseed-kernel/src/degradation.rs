//! Explicit representation of distinguishability degradation.
//!
//! The graph encodes only transformations the manifest declared:
//! undeclared degradation is never assumed, and reconstruction paths
//! never exist unless explicitly declared. The rule catalog enforces
//! the invariants (irreversible edges have no inverse, destroyed
//! distinctions never reappear downstream, irreversibility is acyclic).

use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Directed degradation edge between two representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegradationEdge {
    pub source: String,
    pub target: String,
    pub irreversible: bool,
    pub destroyed_distinctions: BTreeSet<String>,
}

impl DegradationEdge {
    /// Manifest field path for violations about this edge.
    pub fn path(&self) -> String {
        format!("degradation[{}->{}]", self.source, self.target)
    }
}

/// Graph of declared degradation and irreversibility.
///
/// Constructed empty by default; populated only when the manifest
/// explicitly declares degradation edges. Edges are held in a canonical
/// `(source, target)` order so every traversal is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DegradationGraph {
    pub nodes: BTreeSet<String>,
    pub edges: Vec<DegradationEdge>,
}

impl DegradationGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// True when an edge `source -> target` is declared.
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges
            .iter()
            .any(|edge| edge.source == source && edge.target == target)
    }

    /// All nodes reachable from `start` by following declared edges,
    /// including `start`'s direct successors but not `start` itself
    /// unless a cycle returns to it.
    pub fn reachable_from(&self, start: &str) -> BTreeSet<String> {
        let adjacency = self.adjacency();
        let mut reached = BTreeSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(start);
        while let Some(node) = queue.pop_front() {
            let Some(successors) = adjacency.get(node) else {
                continue;
            };
            for &next in successors {
                if reached.insert(next.to_string()) {
                    queue.push_back(next);
                }
            }
        }
        reached
    }

    /// True when the subgraph of irreversible edges contains a cycle.
    pub fn has_irreversible_cycle(&self) -> bool {
        let mut adjacency: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for edge in self.edges.iter().filter(|edge| edge.irreversible) {
            adjacency
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
        }

        let mut visiting: BTreeSet<&str> = BTreeSet::new();
        let mut done: BTreeSet<&str> = BTreeSet::new();
        let roots: Vec<&str> = adjacency.keys().copied().collect();
        for root in roots {
            if cycle_from(root, &adjacency, &mut visiting, &mut done) {
                return true;
            }
        }
        false
    }

    fn adjacency(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut adjacency: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for edge in &self.edges {
            adjacency
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
        }
        adjacency
    }
}

fn cycle_from<'a>(
    node: &'a str,
    adjacency: &BTreeMap<&'a str, Vec<&'a str>>,
    visiting: &mut BTreeSet<&'a str>,
    done: &mut BTreeSet<&'a str>,
) -> bool {
    if done.contains(node) {
        return false;
    }
    if !visiting.insert(node) {
        return true;
    }
    if let Some(successors) = adjacency.get(node) {
        for &next in successors {
            if cycle_from(next, adjacency, visiting, done) {
                return true;
            }
        }
    }
    visiting.remove(node);
    done.insert(node);
    false
}
