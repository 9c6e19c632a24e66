use hsi_core::errors::{ErrorInfo, HsiError};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing a single spread run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Effective per-hyperedge infection rate.
    #[serde(default = "default_rate")]
    pub rate: f64,
    /// Fraction of the population seeded infected at time 0.
    #[serde(default = "default_initial_fraction")]
    pub initial_infected_fraction: f64,
    /// Number of grid steps in the discretized series.
    #[serde(default = "default_num_steps")]
    pub num_steps: usize,
    /// Grid spacing of the discretized series.
    #[serde(default = "default_dt")]
    pub dt: f64,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_rate() -> f64 {
    1.0
}

fn default_initial_fraction() -> f64 {
    0.01
}

fn default_num_steps() -> usize {
    100
}

fn default_dt() -> f64 {
    0.1
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rate: default_rate(),
            initial_infected_fraction: default_initial_fraction(),
            num_steps: default_num_steps(),
            dt: default_dt(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

impl RunConfig {
    /// Parses a configuration from YAML text, applying field defaults.
    pub fn from_yaml(text: &str) -> Result<Self, HsiError> {
        serde_yaml::from_str(text).map_err(|err| {
            HsiError::Serde(
                ErrorInfo::new("config-parse", err.to_string())
                    .with_hint("check the run configuration YAML against the documented schema"),
            )
        })
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed all realization and run substreams derive from.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label documented alongside derived substreams.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0xD15E_A5E5_EED0_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}
