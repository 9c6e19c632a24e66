use hsi_core::errors::{ErrorInfo, HsiError};
use serde::{Deserialize, Serialize};

/// Uniform-grid prevalence series produced by [`discretize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    dt: f64,
    samples: Vec<f64>,
}

impl TimeSeries {
    pub(crate) fn from_parts(dt: f64, samples: Vec<f64>) -> Self {
        Self { dt, samples }
    }

    /// Returns the grid spacing.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the prevalence samples, index i holding the value at `i · dt`.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns the number of samples (grid steps plus one).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the final sample, if any.
    pub fn last(&self) -> Option<f64> {
        self.samples.last().copied()
    }

    /// Iterates over `(t, prevalence)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples
            .iter()
            .enumerate()
            .map(move |(step, &value)| (step as f64 * self.dt, value))
    }
}

/// Converts an infection-time vector into a right-continuous step series.
///
/// Produces `num_steps + 1` samples on the grid `t_i = i · dt`. Sample 0 is
/// pinned to `initial_infected_fraction` by convention; sample i ≥ 1 is the
/// fraction of nodes with infection time strictly below `t_i`. No
/// interpolation is performed.
pub fn discretize(
    infection_times: &[f64],
    num_steps: usize,
    dt: f64,
    population: usize,
    initial_infected_fraction: f64,
) -> Result<TimeSeries, HsiError> {
    if population == 0 {
        return Err(HsiError::Config(ErrorInfo::new(
            "empty-population",
            "cannot discretize over an empty population",
        )));
    }
    if infection_times.len() != population {
        return Err(HsiError::Config(
            ErrorInfo::new("population-mismatch", "infection-time vector length differs from M")
                .with_context("population", population)
                .with_context("found", infection_times.len()),
        ));
    }
    if !dt.is_finite() || dt <= 0.0 {
        return Err(HsiError::Config(
            ErrorInfo::new("step-size-range", "step size must be finite and positive")
                .with_context("dt", dt),
        ));
    }
    if !(0.0..=1.0).contains(&initial_infected_fraction) {
        return Err(HsiError::Config(
            ErrorInfo::new("initial-fraction-range", "initial infected fraction outside [0, 1]")
                .with_context("fraction", initial_infected_fraction),
        ));
    }

    let mut finite: Vec<f64> = infection_times
        .iter()
        .copied()
        .filter(|time| time.is_finite())
        .collect();
    finite.sort_by(f64::total_cmp);

    let mut samples = Vec::with_capacity(num_steps + 1);
    samples.push(initial_infected_fraction);
    for step in 1..=num_steps {
        let t = step as f64 * dt;
        let infected = finite.partition_point(|&time| time < t);
        samples.push(infected as f64 / population as f64);
    }
    Ok(TimeSeries::from_parts(dt, samples))
}
