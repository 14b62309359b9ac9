use serde::{Deserialize, Serialize};

use crate::error::FarmError;

/// N/P/K nutrient levels in ppm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilNutrients {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

/// Current environmental readings for a plot.
///
/// Owned by the caller; the engine reads a snapshot per computation and
/// never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalFactors {
    /// °C
    pub temperature: f64,
    /// %
    pub humidity: f64,
    /// mm/week
    pub rainfall: f64,
    /// hours/day
    pub sunlight: f64,
    /// km/h
    pub wind_speed: f64,
    /// Soil pH
    pub ph: f64,
    /// hectares
    pub crop_area: f64,
    /// plants/m²
    pub crop_density: f64,
    /// liters
    pub pesticides: f64,
    /// %
    pub soil_moisture: f64,
    /// 0-1 scale
    pub crop_health: f64,
    /// ppm; last so the TOML form keeps scalars ahead of the nested table
    pub soil_nutrients: SoilNutrients,
}

impl Default for EnvironmentalFactors {
    fn default() -> Self {
        Self {
            temperature: 25.0,
            humidity: 65.0,
            rainfall: 20.0,
            sunlight: 6.0,
            wind_speed: 10.0,
            ph: 6.5,
            crop_area: 5.0,
            crop_density: 12.0,
            pesticides: 20.0,
            soil_moisture: 45.0,
            crop_health: 0.6,
            soil_nutrients: SoilNutrients {
                n: 25.0,
                p: 15.0,
                k: 30.0,
            },
        }
    }
}

impl EnvironmentalFactors {
    /// Validate readings. Returns `FarmError::ValidationError` on failure.
    pub fn validate(&self) -> Result<(), FarmError> {
        if !(0.0..=100.0).contains(&self.humidity) {
            return Err(FarmError::ValidationError(format!(
                "humidity must be in 0..=100, got {}",
                self.humidity
            )));
        }
        if self.rainfall < 0.0 {
            return Err(FarmError::ValidationError(format!(
                "rainfall must be non-negative, got {}",
                self.rainfall
            )));
        }
        if !(0.0..=24.0).contains(&self.sunlight) {
            return Err(FarmError::ValidationError(format!(
                "sunlight must be in 0..=24 hours/day, got {}",
                self.sunlight
            )));
        }
        if !(0.0..=14.0).contains(&self.ph) {
            return Err(FarmError::ValidationError(format!(
                "ph must be in 0..=14, got {}",
                self.ph
            )));
        }
        if !(0.0..=1.0).contains(&self.crop_health) {
            return Err(FarmError::ValidationError(format!(
                "crop_health must be in 0.0..=1.0, got {}",
                self.crop_health
            )));
        }
        Ok(())
    }
}

/// Resource budgets available for the growth cycle, consumed by the external
/// optimizer request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceBudget {
    /// Liters
    pub water: f64,
    /// kg
    pub fertilizer: f64,
}

impl Default for ResourceBudget {
    fn default() -> Self {
        Self {
            water: 5000.0,
            fertilizer: 500.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_environment() {
        let env = EnvironmentalFactors::default();
        assert_eq!(env.temperature, 25.0);
        assert_eq!(env.humidity, 65.0);
        assert_eq!(env.rainfall, 20.0);
        assert_eq!(env.sunlight, 6.0);
        assert_eq!(env.wind_speed, 10.0);
        assert_eq!(env.soil_nutrients.n, 25.0);
        assert_eq!(env.crop_health, 0.6);
    }

    #[test]
    fn test_default_validates() {
        assert!(EnvironmentalFactors::default().validate().is_ok());
    }

    #[test]
    fn test_validate_humidity_out_of_range() {
        let env = EnvironmentalFactors {
            humidity: 120.0,
            ..Default::default()
        };
        let err = env.validate().unwrap_err();
        assert!(err.to_string().contains("humidity"));
    }

    #[test]
    fn test_validate_negative_rainfall() {
        let env = EnvironmentalFactors {
            rainfall: -5.0,
            ..Default::default()
        };
        assert!(env.validate().is_err());
    }

    #[test]
    fn test_validate_sunlight_bounds() {
        let env = EnvironmentalFactors {
            sunlight: 25.0,
            ..Default::default()
        };
        assert!(env.validate().is_err());

        let env = EnvironmentalFactors {
            sunlight: 0.0,
            ..Default::default()
        };
        assert!(env.validate().is_ok());
    }

    #[test]
    fn test_validate_ph_bounds() {
        let env = EnvironmentalFactors {
            ph: 15.0,
            ..Default::default()
        };
        assert!(env.validate().is_err());
    }

    #[test]
    fn test_validate_crop_health_bounds() {
        let env = EnvironmentalFactors {
            crop_health: 1.1,
            ..Default::default()
        };
        assert!(env.validate().is_err());
    }

    #[test]
    fn test_default_budget() {
        let budget = ResourceBudget::default();
        assert_eq!(budget.water, 5000.0);
        assert_eq!(budget.fertilizer, 500.0);
    }

    #[test]
    fn test_environment_json_roundtrip() {
        let env = EnvironmentalFactors::default();
        let json = serde_json::to_string(&env).unwrap();
        let deserialized: EnvironmentalFactors = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, env);
    }
}
