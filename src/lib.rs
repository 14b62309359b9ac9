pub mod analysis;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod io;
pub mod models;
pub mod optimizer;
pub mod visualization;

pub use engine::SimulationCoordinator;
pub use error::FarmError;
pub use io::Scenario;
pub use models::{
    Crop, DayPlan, EnvironmentalFactors, GrowthStage, SoilType, WeekPlan, WeeklySchedule,
};
