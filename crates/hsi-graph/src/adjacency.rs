use hsi_core::errors::HsiError;
use hsi_core::NodeId;
use serde::{Deserialize, Serialize};

use crate::hyperedges::{graph_error, ContextExt, HyperedgeList};
use crate::ids::{make_node, node_index};

/// Dense symmetric adjacency over a fixed node population.
///
/// Backs the pairwise (arity 2) simulation variant, where a node's hazard
/// multiplicity reduces to its count of infected neighbours. The diagonal is
/// always zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    num_nodes: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Creates an edgeless adjacency over `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            cells: vec![false; num_nodes * num_nodes],
        }
    }

    /// Builds an adjacency from explicit rows, validating shape and symmetry.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, HsiError> {
        let num_nodes = rows.len();
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != num_nodes {
                return Err(graph_error("ragged-adjacency", "adjacency rows must form a square")
                    .with_context("row", idx)
                    .with_context("expected", num_nodes)
                    .with_context("found", row.len()));
            }
        }
        let mut matrix = Self::new(num_nodes);
        for (a, row) in rows.iter().enumerate() {
            for (b, &connected) in row.iter().enumerate() {
                if !connected {
                    continue;
                }
                if a == b {
                    return Err(graph_error("self-loop", "adjacency diagonal must be zero")
                        .with_context("node", a));
                }
                if !rows[b][a] {
                    return Err(graph_error("asymmetric-adjacency", "adjacency must be symmetric")
                        .with_context("row", a)
                        .with_context("column", b));
                }
                matrix.cells[a * num_nodes + b] = true;
            }
        }
        Ok(matrix)
    }

    /// Projects an arity-2 hyperedge list onto its adjacency matrix.
    pub fn from_hyperedges(list: &HyperedgeList) -> Result<Self, HsiError> {
        if list.arity() != 2 {
            return Err(graph_error("not-pairwise", "adjacency projection needs arity 2")
                .with_context("arity", list.arity()));
        }
        let mut matrix = Self::new(list.num_nodes());
        for edge in list.edges() {
            let members = edge.members();
            matrix.connect(members[0], members[1])?;
        }
        Ok(matrix)
    }

    /// Connects two distinct nodes (idempotent).
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<(), HsiError> {
        let (ia, ib) = (node_index(a), node_index(b));
        if ia >= self.num_nodes || ib >= self.num_nodes {
            return Err(graph_error("member-out-of-range", "node outside population")
                .with_context("node", ia.max(ib))
                .with_context("num_nodes", self.num_nodes));
        }
        if ia == ib {
            return Err(graph_error("self-loop", "cannot connect a node to itself")
                .with_context("node", ia));
        }
        self.cells[ia * self.num_nodes + ib] = true;
        self.cells[ib * self.num_nodes + ia] = true;
        Ok(())
    }

    /// Returns whether two nodes are connected.
    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        let (ia, ib) = (node_index(a), node_index(b));
        ia < self.num_nodes && ib < self.num_nodes && self.cells[ia * self.num_nodes + ib]
    }

    /// Returns the population size.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the degree of `node`.
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).count()
    }

    /// Iterates over the neighbours of `node` in ascending order.
    ///
    /// Out-of-range nodes have no neighbours.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let row = node_index(node);
        let start = row.saturating_mul(self.num_nodes);
        self.cells
            .get(start..start + self.num_nodes)
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .filter(|(_, connected)| **connected)
            .map(|(column, _)| make_node(column))
    }
}
