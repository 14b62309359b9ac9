mod crops;
mod soils;
mod strategies;

pub use crops::{crop_catalog, find_crop, find_crop_by_id};
pub use soils::{find_soil, find_soil_by_id, soil_catalog};
pub use strategies::{find_strategy, strategy_catalog, StrategyInfo};
