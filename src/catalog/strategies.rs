use serde::{Deserialize, Serialize};

/// Display metadata for an advertised scheduling strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyInfo {
    /// Identifier accepted by the schedule generator
    pub id: String,
    /// Display name
    pub name: String,
    /// What the strategy does
    pub description: String,
    /// When to pick it
    pub best_for: String,
}

/// The advertised strategy catalog.
///
/// `greedy` is advertised here but has no dedicated generation branch; the
/// generator resolves it to the `astar` distribution pattern.
pub fn strategy_catalog() -> Vec<StrategyInfo> {
    vec![
        StrategyInfo {
            id: "astar".to_string(),
            name: "A* Algorithm".to_string(),
            description: "A* search algorithm for path-finding the optimal resource allocation"
                .to_string(),
            best_for: "Predictable environments with clear optimization goals".to_string(),
        },
        StrategyInfo {
            id: "genetic".to_string(),
            name: "Genetic Algorithm".to_string(),
            description: "Evolutionary approach that mimics natural selection to find optimal \
                          solutions"
                .to_string(),
            best_for: "Highly variable conditions and multiple competing objectives".to_string(),
        },
        StrategyInfo {
            id: "csp".to_string(),
            name: "Constraint Satisfaction".to_string(),
            description: "Finds solutions that satisfy a set of constraints between variables"
                .to_string(),
            best_for: "Limited resource scenarios with many constraints to balance".to_string(),
        },
        StrategyInfo {
            id: "greedy".to_string(),
            name: "Greedy Search".to_string(),
            description: "A fast, heuristic-based search for quick solutions.".to_string(),
            best_for: "Simple, fast optimization".to_string(),
        },
    ]
}

/// Look up strategy metadata by identifier.
pub fn find_strategy(id: &str) -> Option<StrategyInfo> {
    strategy_catalog().into_iter().find(|s| s.id == id)
}
