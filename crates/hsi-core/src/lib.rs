#![deny(missing_docs)]
#![doc = "Core identifiers, compartment states, structured errors, and deterministic randomness shared by the HSI crates."]

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, HsiError};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::Compartment;

/// Identifier for a node within a hypergraph realization.
///
/// Nodes are dense indices: a population of `M` nodes uses the raw values
/// `0..M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}
