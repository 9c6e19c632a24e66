use hsi_core::derive_substream_seed;

/// Derives the deterministic seed for a specific hypergraph realization.
pub fn realization_seed(master_seed: u64, realization: usize) -> u64 {
    derive_substream_seed(master_seed, realization as u64)
}

/// Derives the deterministic seed for one run on a realization.
///
/// Runs on the same realization draw from disjoint substreams, so parallel
/// execution cannot correlate their outcomes.
pub fn run_seed(master_seed: u64, realization: usize, run: usize) -> u64 {
    let intermediate = derive_substream_seed(master_seed, realization as u64);
    derive_substream_seed(intermediate, run as u64)
}
