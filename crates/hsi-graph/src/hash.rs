use sha2::{Digest, Sha256};

use crate::hyperedges::HyperedgeList;

/// Computes the canonical structural hash for the provided realization.
///
/// The hash is independent of generation order: member sets are sorted before
/// encoding, so two lists over the same hyperedges collide exactly.
pub fn canonical_hash(list: &HyperedgeList) -> String {
    let mut hasher = Sha256::new();
    hasher.update((list.num_nodes() as u64).to_le_bytes());
    hasher.update((list.arity() as u64).to_le_bytes());

    let mut signatures: Vec<Vec<u64>> = list
        .edges()
        .iter()
        .map(|edge| edge.members().iter().map(|id| id.as_raw()).collect())
        .collect();
    signatures.sort();
    hasher.update((signatures.len() as u64).to_le_bytes());
    for signature in signatures {
        update_slice(&signature, &mut hasher);
    }

    format!("{:x}", hasher.finalize())
}

fn update_slice(values: &[u64], hasher: &mut Sha256) {
    hasher.update((values.len() as u64).to_le_bytes());
    for value in values {
        hasher.update(value.to_le_bytes());
    }
}
