use hsi_core::errors::{ErrorInfo, HsiError};
use hsi_core::{Compartment, NodeId};
use hsi_graph::{AdjacencyMatrix, HyperedgeList, IncidenceIndex};

/// Infection-state bookkeeping behind the shared event loop.
///
/// A node's *multiplicity* is the number of qualifying groups pressing on it:
/// hyperedges in which it is the unique remaining susceptible member. The
/// node's instantaneous hazard is the effective rate times its multiplicity,
/// so the engine only needs to know when a multiplicity grew.
pub trait HazardModel {
    /// Returns the population size M.
    fn population(&self) -> usize;

    /// Returns whether `node` already carries the contagion.
    fn is_infected(&self, node: usize) -> bool;

    /// Returns the current hazard multiplicity of `node`.
    fn multiplicity(&self, node: usize) -> usize;

    /// Marks `node` infected and appends to `raised` every still-susceptible
    /// node whose multiplicity grew as a consequence.
    fn infect(&mut self, node: usize, raised: &mut Vec<usize>);
}

/// Incidence-based bookkeeping for arbitrary-arity hyperedge lists.
///
/// Tracks the infected-member count of every hyperedge; when a count reaches
/// arity − 1 the edge's unique susceptible member gains one multiplicity.
#[derive(Debug)]
pub struct HyperedgeHazards<'a> {
    list: &'a HyperedgeList,
    index: &'a IncidenceIndex,
    states: Vec<Compartment>,
    infected_members: Vec<usize>,
    multiplicity: Vec<usize>,
}

impl<'a> HyperedgeHazards<'a> {
    /// Creates fresh bookkeeping for one run over `list`.
    ///
    /// The incidence index must have been built from the same list; both are
    /// borrowed read-only so parallel runs can share them.
    pub fn new(list: &'a HyperedgeList, index: &'a IncidenceIndex) -> Result<Self, HsiError> {
        if index.num_nodes() != list.num_nodes() || index.num_edges() != list.len() {
            return Err(HsiError::Graph(
                ErrorInfo::new("index-mismatch", "incidence index built for a different list")
                    .with_context("index_nodes", index.num_nodes())
                    .with_context("list_nodes", list.num_nodes())
                    .with_context("index_edges", index.num_edges())
                    .with_context("list_edges", list.len()),
            ));
        }
        Ok(Self {
            list,
            index,
            states: vec![Compartment::Susceptible; list.num_nodes()],
            infected_members: vec![0; list.len()],
            multiplicity: vec![0; list.num_nodes()],
        })
    }
}

impl HazardModel for HyperedgeHazards<'_> {
    fn population(&self) -> usize {
        self.list.num_nodes()
    }

    fn is_infected(&self, node: usize) -> bool {
        self.states[node].is_infected()
    }

    fn multiplicity(&self, node: usize) -> usize {
        self.multiplicity[node]
    }

    fn infect(&mut self, node: usize, raised: &mut Vec<usize>) {
        if self.states[node].is_infected() {
            return;
        }
        self.states[node] = Compartment::Infected;
        let arity = self.list.arity();
        for &edge_idx in self.index.edges_of(node) {
            self.infected_members[edge_idx] += 1;
            if self.infected_members[edge_idx] + 1 != arity {
                continue;
            }
            // Exactly one susceptible member remains in this edge.
            let survivor = self.list.edges()[edge_idx]
                .members()
                .iter()
                .map(|id| id.as_raw() as usize)
                .find(|member| !self.states[*member].is_infected());
            if let Some(member) = survivor {
                self.multiplicity[member] += 1;
                raised.push(member);
            }
        }
    }
}

/// Infected-neighbour bookkeeping for the pairwise (arity 2) case.
///
/// For size-2 edges a node's multiplicity equals its count of infected
/// neighbours, so the adjacency row replaces the per-edge counters.
#[derive(Debug)]
pub struct AdjacencyHazards<'a> {
    matrix: &'a AdjacencyMatrix,
    states: Vec<Compartment>,
    multiplicity: Vec<usize>,
}

impl<'a> AdjacencyHazards<'a> {
    /// Creates fresh bookkeeping for one run over `matrix`.
    pub fn new(matrix: &'a AdjacencyMatrix) -> Self {
        Self {
            matrix,
            states: vec![Compartment::Susceptible; matrix.num_nodes()],
            multiplicity: vec![0; matrix.num_nodes()],
        }
    }
}

impl HazardModel for AdjacencyHazards<'_> {
    fn population(&self) -> usize {
        self.matrix.num_nodes()
    }

    fn is_infected(&self, node: usize) -> bool {
        self.states[node].is_infected()
    }

    fn multiplicity(&self, node: usize) -> usize {
        self.multiplicity[node]
    }

    fn infect(&mut self, node: usize, raised: &mut Vec<usize>) {
        if self.states[node].is_infected() {
            return;
        }
        self.states[node] = Compartment::Infected;
        for neighbor in self.matrix.neighbors(NodeId::from_raw(node as u64)) {
            let neighbor = neighbor.as_raw() as usize;
            if !self.states[neighbor].is_infected() {
                self.multiplicity[neighbor] += 1;
                raised.push(neighbor);
            }
        }
    }
}
