use std::collections::BTreeSet;

use hsi_core::errors::{ErrorInfo, HsiError};
use hsi_core::rng::RngHandle;
use hsi_core::NodeId;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::hyperedges::{graph_error, ContextExt, Hyperedge, HyperedgeList};
use crate::ids::make_node;

/// Result of one configuration-model draw.
///
/// Degenerate blocks are discarded, not replaced, so the realized degree
/// sequence sits slightly below its target whenever either tally is non-zero.
/// The accounting identity `removed_internal + removed_duplicate + kept ==
/// total_stubs / arity` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// The surviving canonical hyperedges.
    pub hypergraph: HyperedgeList,
    /// Blocks discarded because a node appeared more than once inside them.
    pub removed_internal: usize,
    /// Blocks discarded because their canonical set was already present.
    pub removed_duplicate: usize,
}

impl GenerationOutcome {
    /// Returns the number of raw blocks the stub list was partitioned into.
    pub fn total_blocks(&self) -> usize {
        self.removed_internal + self.removed_duplicate + self.hypergraph.len()
    }
}

/// Draws a random `arity`-uniform hypergraph from a degree sequence.
///
/// Node `i` contributes `degrees[i]` stubs; the stub list is shuffled
/// uniformly and partitioned into consecutive blocks of `arity` stubs. A
/// block whose stubs are not all distinct is discarded, as is any block whose
/// canonical set duplicates an earlier one. Fails when the stub count is not
/// divisible by `arity`.
pub fn generate_hypergraph(
    degrees: &[usize],
    arity: usize,
    rng: &mut RngHandle,
) -> Result<GenerationOutcome, HsiError> {
    if arity < 2 {
        return Err(graph_error("invalid-arity", "hyperedges need at least two members")
            .with_context("arity", arity));
    }
    let total_stubs: usize = degrees.iter().sum();
    if total_stubs % arity != 0 {
        return Err(HsiError::Config(
            ErrorInfo::new(
                "stub-count-indivisible",
                "degree sequence sum is not divisible by the hyperedge size",
            )
            .with_context("total_stubs", total_stubs)
            .with_context("arity", arity)
            .with_hint("adjust the degree sequence so its sum is a multiple of the arity"),
        ));
    }

    let mut stubs: Vec<NodeId> = Vec::with_capacity(total_stubs);
    for (node, &degree) in degrees.iter().enumerate() {
        stubs.extend(std::iter::repeat(make_node(node)).take(degree));
    }
    stubs.shuffle(rng);

    let mut seen: BTreeSet<Vec<u64>> = BTreeSet::new();
    let mut edges = Vec::with_capacity(total_stubs / arity);
    let mut removed_internal = 0usize;
    let mut removed_duplicate = 0usize;
    for block in stubs.chunks_exact(arity) {
        let mut members = block.to_vec();
        members.sort_by_key(|id| id.as_raw());
        if members.windows(2).any(|pair| pair[0] == pair[1]) {
            removed_internal += 1;
            continue;
        }
        let signature: Vec<u64> = members.iter().map(|id| id.as_raw()).collect();
        if !seen.insert(signature) {
            removed_duplicate += 1;
            continue;
        }
        edges.push(Hyperedge::from_sorted(members));
    }

    Ok(GenerationOutcome {
        hypergraph: HyperedgeList::from_parts(degrees.len(), arity, edges),
        removed_internal,
        removed_duplicate,
    })
}

/// Draws a d-regular `arity`-uniform hypergraph over `num_nodes` nodes.
///
/// Regularity holds for the stub list only; discarded degenerate blocks leave
/// the realized degrees mildly sub-target.
pub fn gen_regular(
    num_nodes: usize,
    degree: usize,
    arity: usize,
    rng: &mut RngHandle,
) -> Result<GenerationOutcome, HsiError> {
    generate_hypergraph(&vec![degree; num_nodes], arity, rng)
}
