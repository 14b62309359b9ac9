use serde::{Deserialize, Serialize};

use super::GrowthStage;
use crate::error::FarmError;

/// Optimal environmental conditions for a crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalConditions {
    /// °C
    pub temperature: f64,
    /// %
    pub humidity: f64,
    /// mm/week
    pub rainfall: f64,
    /// hours/day
    pub sunlight: f64,
}

/// A crop profile: growth parameters, per-stage resource requirements, and
/// the optimal conditions its health is scored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    /// Unique crop identifier
    pub id: u32,
    /// Display name (e.g. "Rice")
    pub name: String,
    /// Full growth cycle length in days
    pub growth_duration_days: u32,
    /// Reference yield under ideal conditions (kg/ha)
    pub base_yield: f64,
    /// Water needs per growth stage (mm/week), indexed Vegetative..Ripening
    pub water_requirements: [f64; 3],
    /// Fertilizer needs per growth stage (kg/week)
    pub fertilizer_requirements: [f64; 3],
    /// Conditions under which the crop does best
    pub optimal_conditions: OptimalConditions,
    /// Compatibility with each soil type in [0,1], indexed by soil id - 1
    pub soil_compatibility: [f64; 3],
    /// Prose description
    pub description: String,
}

impl Crop {
    /// Water requirement (mm/week) for a growth stage.
    pub fn water_requirement(&self, stage: GrowthStage) -> f64 {
        self.water_requirements[stage.requirement_index()]
    }

    /// Fertilizer requirement (kg/week) for a growth stage.
    pub fn fertilizer_requirement(&self, stage: GrowthStage) -> f64 {
        self.fertilizer_requirements[stage.requirement_index()]
    }

    /// Validate profile parameters. Returns `FarmError::ValidationError` on failure.
    pub fn validate(&self) -> Result<(), FarmError> {
        if self.growth_duration_days == 0 {
            return Err(FarmError::ValidationError(format!(
                "Crop {}: growth duration must be positive",
                self.name
            )));
        }
        if self.base_yield <= 0.0 {
            return Err(FarmError::ValidationError(format!(
                "Crop {}: base yield must be positive, got {}",
                self.name, self.base_yield
            )));
        }
        for req in self.water_requirements.iter().chain(&self.fertilizer_requirements) {
            if *req < 0.0 {
                return Err(FarmError::ValidationError(format!(
                    "Crop {}: resource requirements must be non-negative, got {req}",
                    self.name
                )));
            }
        }
        for compat in &self.soil_compatibility {
            if !(0.0..=1.0).contains(compat) {
                return Err(FarmError::ValidationError(format!(
                    "Crop {}: soil compatibility must be in 0.0..=1.0, got {compat}",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} days)", self.name, self.growth_duration_days)
    }
}
