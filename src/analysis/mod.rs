mod comparison;

pub use comparison::{compare_strategies, ConfidenceInterval, StrategySummary};
