//! Boundary types for the external optimization service.
//!
//! The engine never performs network I/O itself; a caller gathers a request
//! snapshot, talks to the service, and feeds the outcome back through
//! [`crate::engine::SimulationCoordinator::apply_optimization`]. Field names
//! follow the service's wire format.

use serde::{Deserialize, Serialize};

use crate::error::FarmError;
use crate::models::WeeklySchedule;

/// Step budget sent with every optimization request.
pub const DEFAULT_MAX_STEPS: u32 = 30;

/// N/P/K breakdown as the service expects it (upper-case keys).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientBreakdown {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
}

/// Snapshot of engine state sent to the external optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    /// Strategy identifier
    pub algorithm: String,
    /// Lower-cased crop name
    pub crop_type: String,
    /// 1-based soil id
    pub soil_type: u32,
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub sunlight: f64,
    pub wind_speed: f64,
    pub ph: f64,
    pub crop_area: f64,
    pub crop_density: f64,
    /// Water budget (liters)
    pub water: f64,
    /// Fertilizer budget broken down by nutrient
    pub fertilizer: NutrientBreakdown,
    pub pesticides: f64,
    /// Target yield (kg/ha)
    pub goal_yield: f64,
    pub max_steps: u32,
    /// 1-based growth stage id
    pub growth_stage: u8,
    pub soil_moisture: f64,
    pub soil_nutrients: NutrientBreakdown,
    pub crop_health: f64,
}

/// Result returned by the external optimizer.
///
/// On success the coordinator adopts both fields wholesale, replacing its
/// locally generated schedule and forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResponse {
    pub schedule: WeeklySchedule,
    #[serde(rename = "yield")]
    pub yield_forecast: f64,
}

/// The seam a caller implements to reach an optimization service.
///
/// A failed attempt maps the service's `detail` message into
/// [`FarmError::Optimization`].
pub trait ScheduleOptimizer {
    fn optimize(&self, request: &OptimizationRequest) -> Result<OptimizationResponse, FarmError>;
}
