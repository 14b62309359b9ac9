mod crop;
mod environment;
mod schedule;
mod soil;
mod stage;

pub use crop::{Crop, OptimalConditions};
pub use environment::{EnvironmentalFactors, ResourceBudget, SoilNutrients};
pub use schedule::{DayPlan, WeekPlan, WeeklySchedule};
pub use soil::SoilType;
pub use stage::GrowthStage;
