use serde::{Deserialize, Serialize};

/// Daily distribution strategy used by the schedule generator.
///
/// Only three distribution patterns exist. Identifiers outside the known set
/// resolve to `Astar`; that includes the advertised `greedy` strategy, which
/// has never had a branch of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Even spread: water every other day, fertilizer three times a week
    Csp,
    /// Stochastic per-day draws
    Genetic,
    /// Concentrated: two watering days, one full fertilizer application
    Astar,
}

impl Strategy {
    /// Resolve a caller-supplied strategy identifier.
    ///
    /// Unrecognized identifiers degrade to `Astar` rather than failing, so
    /// new identifiers can be advertised without breaking generation.
    pub fn resolve(id: &str) -> Strategy {
        match id {
            "csp" => Strategy::Csp,
            "genetic" => Strategy::Genetic,
            _ => Strategy::Astar,
        }
    }

    /// Whether the strategy draws from a random source.
    pub fn is_stochastic(&self) -> bool {
        matches!(self, Strategy::Genetic)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Csp => write!(f, "csp"),
            Strategy::Genetic => write!(f, "genetic"),
            Strategy::Astar => write!(f, "astar"),
        }
    }
}
