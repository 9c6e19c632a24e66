use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hsi_core::errors::{ErrorInfo, HsiError};
use hsi_core::rng::RngHandle;
use hsi_graph::{AdjacencyMatrix, HyperedgeList};
use rand::Rng;

use crate::hazard::{AdjacencyHazards, HazardModel, HyperedgeHazards};

/// Scheduled infection candidate. Entries are invalidated lazily: a popped
/// candidate only fires if its epoch still matches the node's counter.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    time: f64,
    node: usize,
    epoch: u64,
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .time
            .total_cmp(&self.time)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.epoch.cmp(&self.epoch))
    }
}

/// Runs the SI event loop over any hazard model.
///
/// Seeds `round(fraction × M)` nodes uniformly without replacement at time 0,
/// then repeatedly advances the clock to the earliest exponential candidate,
/// infects that node, and resamples candidates only for nodes whose
/// multiplicity grew (memorylessness makes this exact). Returns the per-node
/// infection times; nodes never reached stay at `f64::INFINITY`, which is a
/// valid terminal state rather than an error.
pub fn simulate<H: HazardModel>(
    rate: f64,
    model: &mut H,
    initial_infected_fraction: f64,
    rng: &mut RngHandle,
) -> Result<Vec<f64>, HsiError> {
    if rate.is_nan() || rate == f64::INFINITY {
        return Err(HsiError::Sampling(
            ErrorInfo::new("rate-not-finite", "effective rate must be a finite number")
                .with_context("rate", rate),
        ));
    }
    if !(0.0..=1.0).contains(&initial_infected_fraction) {
        return Err(HsiError::Config(
            ErrorInfo::new("initial-fraction-range", "initial infected fraction outside [0, 1]")
                .with_context("fraction", initial_infected_fraction)
                .with_hint("pass a fraction between 0 and 1"),
        ));
    }

    let population = model.population();
    let mut infection_times = vec![f64::INFINITY; population];
    let seed_count = (initial_infected_fraction * population as f64).round() as usize;
    let mut raised = Vec::new();
    for node in rand::seq::index::sample(rng, population, seed_count) {
        infection_times[node] = 0.0;
        model.infect(node, &mut raised);
    }
    raised.clear();
    if rate <= 0.0 {
        // Zero or negative rate: seeds stay the only infections.
        return Ok(infection_times);
    }

    let mut epoch = vec![0u64; population];
    let mut queue = BinaryHeap::new();
    for node in 0..population {
        if model.is_infected(node) {
            continue;
        }
        let multiplicity = model.multiplicity(node);
        if multiplicity == 0 {
            continue;
        }
        let wait = waiting_time(rate, multiplicity, rng)?;
        queue.push(Candidate {
            time: wait,
            node,
            epoch: 0,
        });
    }

    while let Some(candidate) = queue.pop() {
        if candidate.epoch != epoch[candidate.node] || model.is_infected(candidate.node) {
            continue;
        }
        let clock = candidate.time;
        infection_times[candidate.node] = clock;
        model.infect(candidate.node, &mut raised);
        for node in raised.drain(..) {
            if model.is_infected(node) {
                continue;
            }
            epoch[node] += 1;
            let wait = waiting_time(rate, model.multiplicity(node), rng)?;
            queue.push(Candidate {
                time: clock + wait,
                node,
                epoch: epoch[node],
            });
        }
    }

    Ok(infection_times)
}

/// Simulates SI spread over a hyperedge list of any arity.
pub fn simulate_hypernetwork(
    rate: f64,
    list: &HyperedgeList,
    initial_infected_fraction: f64,
    rng: &mut RngHandle,
) -> Result<Vec<f64>, HsiError> {
    let index = list.incidence_index();
    let mut model = HyperedgeHazards::new(list, &index)?;
    simulate(rate, &mut model, initial_infected_fraction, rng)
}

/// Simulates SI spread over a pairwise adjacency matrix.
///
/// Statistically equivalent to [`simulate_hypernetwork`] on arity-2 inputs;
/// provided as the cheaper specialization.
pub fn simulate_network(
    rate: f64,
    matrix: &AdjacencyMatrix,
    initial_infected_fraction: f64,
    rng: &mut RngHandle,
) -> Result<Vec<f64>, HsiError> {
    let mut model = AdjacencyHazards::new(matrix);
    simulate(rate, &mut model, initial_infected_fraction, rng)
}

/// Inverse-transform draw of an exponential waiting time at the node hazard.
fn waiting_time(rate: f64, multiplicity: usize, rng: &mut RngHandle) -> Result<f64, HsiError> {
    let hazard = rate * multiplicity as f64;
    if !hazard.is_finite() || hazard < 0.0 {
        return Err(HsiError::Sampling(
            ErrorInfo::new("hazard-out-of-domain", "computed hazard is negative or non-finite")
                .with_context("rate", rate)
                .with_context("multiplicity", multiplicity),
        ));
    }
    if hazard == 0.0 {
        return Ok(f64::INFINITY);
    }
    let draw: f64 = rng.gen();
    Ok(-(1.0 - draw).ln() / hazard)
}
