use serde::{Deserialize, Serialize};

/// Compartment a node occupies during an SI run.
///
/// The transition is one-way: a node moves from [`Compartment::Susceptible`]
/// to [`Compartment::Infected`] at most once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compartment {
    /// The node has not been reached by the contagion.
    Susceptible,
    /// The node carries the contagion; the state is absorbing.
    Infected,
}

impl Compartment {
    /// Returns whether the node carries the contagion.
    pub fn is_infected(&self) -> bool {
        matches!(self, Compartment::Infected)
    }
}
