use serde::{Deserialize, Serialize};

use crate::error::FarmError;

/// A soil type profile.
///
/// Soil ids are 1-based and index into `Crop::soil_compatibility` after
/// subtracting 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilType {
    /// Unique 1-based soil identifier
    pub id: u32,
    /// Display name (e.g. "Loamy")
    pub name: String,
    /// Relative water retention in [0,1]
    pub water_retention: f64,
    /// Relative nutrient retention in [0,1]
    pub nutrient_retention: f64,
    /// Multiplier applied to the yield forecast
    pub yield_multiplier: f64,
    /// Prose description
    pub description: String,
}

impl SoilType {
    /// Validate profile parameters. Returns `FarmError::ValidationError` on failure.
    pub fn validate(&self) -> Result<(), FarmError> {
        if self.id == 0 {
            return Err(FarmError::ValidationError(format!(
                "Soil {}: id must be 1-based",
                self.name
            )));
        }
        if !(0.0..=1.0).contains(&self.water_retention) {
            return Err(FarmError::ValidationError(format!(
                "Soil {}: water retention must be in 0.0..=1.0, got {}",
                self.name, self.water_retention
            )));
        }
        if !(0.0..=1.0).contains(&self.nutrient_retention) {
            return Err(FarmError::ValidationError(format!(
                "Soil {}: nutrient retention must be in 0.0..=1.0, got {}",
                self.name, self.nutrient_retention
            )));
        }
        if self.yield_multiplier <= 0.0 {
            return Err(FarmError::ValidationError(format!(
                "Soil {}: yield multiplier must be positive, got {}",
                self.name, self.yield_multiplier
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
