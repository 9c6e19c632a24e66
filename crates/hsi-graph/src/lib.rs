#![deny(missing_docs)]
#![doc = "Random N-uniform hypergraph construction: canonical hyperedge lists, the stub-based configuration model with degeneracy removal, and the dense pairwise adjacency used by the N=2 specialization."]

mod adjacency;
mod configuration;
mod hash;
mod hyperedges;
mod ids;

pub use adjacency::AdjacencyMatrix;
pub use configuration::{gen_regular, generate_hypergraph, GenerationOutcome};
pub use hash::canonical_hash;
pub use hyperedges::{Hyperedge, HyperedgeList, IncidenceIndex};
