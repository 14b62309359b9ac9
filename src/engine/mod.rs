mod coordinator;
mod forecast;
mod health;
mod schedule;
mod strategy;

pub use coordinator::{ScheduleSource, SimulationCoordinator, REGENERATION_DEBOUNCE};
pub use forecast::forecast_yield;
pub use health::health_score;
pub use schedule::{generate_schedule, generate_schedule_seeded};
pub use strategy::Strategy;
