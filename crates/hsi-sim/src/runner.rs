use hsi_core::errors::HsiError;
use hsi_core::rng::RngHandle;
use hsi_graph::{AdjacencyMatrix, HyperedgeList};
use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::discretize::{discretize, TimeSeries};
use crate::engine::{simulate_hypernetwork, simulate_network};

/// Artifacts of one configured run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutput {
    /// Per-node infection times; `f64::INFINITY` marks nodes never reached.
    pub infection_times: Vec<f64>,
    /// The discretized prevalence series.
    pub series: TimeSeries,
}

/// Runs one configured simulation on a hyperedge list and discretizes it.
pub fn run_hypernetwork(
    config: &RunConfig,
    seed: u64,
    list: &HyperedgeList,
) -> Result<RunOutput, HsiError> {
    let mut rng = RngHandle::from_seed(seed);
    let infection_times = simulate_hypernetwork(
        config.rate,
        list,
        config.initial_infected_fraction,
        &mut rng,
    )?;
    let series = discretize(
        &infection_times,
        config.num_steps,
        config.dt,
        list.num_nodes(),
        config.initial_infected_fraction,
    )?;
    Ok(RunOutput {
        infection_times,
        series,
    })
}

/// Runs one configured simulation on a pairwise adjacency and discretizes it.
pub fn run_network(
    config: &RunConfig,
    seed: u64,
    matrix: &AdjacencyMatrix,
) -> Result<RunOutput, HsiError> {
    let mut rng = RngHandle::from_seed(seed);
    let infection_times = simulate_network(
        config.rate,
        matrix,
        config.initial_infected_fraction,
        &mut rng,
    )?;
    let series = discretize(
        &infection_times,
        config.num_steps,
        config.dt,
        matrix.num_nodes(),
        config.initial_infected_fraction,
    )?;
    Ok(RunOutput {
        infection_times,
        series,
    })
}
