use std::collections::BTreeSet;

use hsi_core::errors::{ErrorInfo, HsiError};
use hsi_core::NodeId;
use serde::{Deserialize, Serialize};

use crate::ids::node_index;

/// A single group interaction between exactly `arity` distinct nodes.
///
/// Members are stored in ascending order; two hyperedges over the same node
/// set therefore compare equal regardless of how they were assembled.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hyperedge {
    members: Box<[NodeId]>,
}

impl Hyperedge {
    pub(crate) fn from_sorted(members: Vec<NodeId>) -> Self {
        Self {
            members: members.into_boxed_slice(),
        }
    }

    /// Returns the member nodes in ascending order.
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    /// Returns the number of member nodes.
    pub fn arity(&self) -> usize {
        self.members.len()
    }

    /// Returns whether `node` belongs to this hyperedge.
    pub fn contains(&self, node: NodeId) -> bool {
        self.members.binary_search(&node).is_ok()
    }
}

/// Immutable list of canonical hyperedges over a fixed node population.
///
/// The list is duplicate-free and every hyperedge has exactly `arity` distinct
/// members drawn from `0..num_nodes`. Once built it is reused read-only by
/// every simulation run on the same realization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperedgeList {
    num_nodes: usize,
    arity: usize,
    edges: Vec<Hyperedge>,
}

impl HyperedgeList {
    /// Builds a list from raw member sets, validating every invariant.
    pub fn new(
        num_nodes: usize,
        arity: usize,
        members_per_edge: Vec<Vec<NodeId>>,
    ) -> Result<Self, HsiError> {
        if arity < 2 {
            return Err(graph_error("invalid-arity", "hyperedges need at least two members")
                .with_context("arity", arity));
        }
        let mut seen: BTreeSet<Vec<u64>> = BTreeSet::new();
        let mut edges = Vec::with_capacity(members_per_edge.len());
        for members in members_per_edge {
            if members.len() != arity {
                return Err(graph_error("arity-mismatch", "hyperedge size differs from arity")
                    .with_context("expected", arity)
                    .with_context("found", members.len()));
            }
            let mut sorted = members;
            sorted.sort_by_key(|id| id.as_raw());
            if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
                return Err(graph_error("repeated-member", "hyperedge members must be distinct"));
            }
            if let Some(out_of_range) = sorted.iter().find(|id| node_index(**id) >= num_nodes) {
                return Err(graph_error("member-out-of-range", "node outside population")
                    .with_context("node", out_of_range.as_raw())
                    .with_context("num_nodes", num_nodes));
            }
            let signature: Vec<u64> = sorted.iter().map(|id| id.as_raw()).collect();
            if !seen.insert(signature) {
                return Err(graph_error("duplicate-edge", "hyperedge already exists"));
            }
            edges.push(Hyperedge::from_sorted(sorted));
        }
        Ok(Self {
            num_nodes,
            arity,
            edges,
        })
    }

    /// Builds a list from hyperedges the generator already canonicalized.
    pub(crate) fn from_parts(num_nodes: usize, arity: usize, edges: Vec<Hyperedge>) -> Self {
        Self {
            num_nodes,
            arity,
            edges,
        }
    }

    /// Returns the population size M.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the uniform hyperedge size N.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the number of hyperedges kept after degeneracy removal.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the list contains no hyperedges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the stored hyperedges in generation order.
    pub fn edges(&self) -> &[Hyperedge] {
        &self.edges
    }

    /// Builds the node-to-hyperedge incidence index for this list.
    pub fn incidence_index(&self) -> IncidenceIndex {
        IncidenceIndex::build(self)
    }
}

/// Compressed node → hyperedge-index map.
///
/// Built once per realization and read-only afterwards, so parallel runs can
/// share one instance without copying.
#[derive(Debug, Clone)]
pub struct IncidenceIndex {
    num_edges: usize,
    offsets: Vec<usize>,
    memberships: Vec<usize>,
}

impl IncidenceIndex {
    fn build(list: &HyperedgeList) -> Self {
        let mut counts = vec![0usize; list.num_nodes()];
        for edge in list.edges() {
            for member in edge.members() {
                counts[node_index(*member)] += 1;
            }
        }
        let mut offsets = Vec::with_capacity(list.num_nodes() + 1);
        let mut running = 0usize;
        offsets.push(0);
        for count in &counts {
            running += count;
            offsets.push(running);
        }
        let mut cursors = offsets[..list.num_nodes()].to_vec();
        let mut memberships = vec![0usize; running];
        for (edge_idx, edge) in list.edges().iter().enumerate() {
            for member in edge.members() {
                let node = node_index(*member);
                memberships[cursors[node]] = edge_idx;
                cursors[node] += 1;
            }
        }
        Self {
            num_edges: list.len(),
            offsets,
            memberships,
        }
    }

    /// Returns the population size the index was built for.
    pub fn num_nodes(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Returns the number of hyperedges the index was built for.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns the hyperedge indices containing `node`.
    pub fn edges_of(&self, node: usize) -> &[usize] {
        &self.memberships[self.offsets[node]..self.offsets[node + 1]]
    }

    /// Returns the realized degree of `node` (after degeneracy removal).
    pub fn degree(&self, node: usize) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }
}

pub(crate) fn graph_error(code: impl Into<String>, message: impl Into<String>) -> HsiError {
    HsiError::Graph(ErrorInfo::new(code, message))
}

pub(crate) trait ContextExt {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> HsiError;
}

impl ContextExt for HsiError {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> HsiError {
        match self {
            HsiError::Graph(info) => HsiError::Graph(info.with_context(key, value)),
            HsiError::Config(info) => HsiError::Config(info.with_context(key, value)),
            other => other,
        }
    }
}
