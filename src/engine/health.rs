use crate::models::{Crop, EnvironmentalFactors, SoilType};

/// Per-degree penalty for temperature deviation from optimal.
const TEMPERATURE_SENSITIVITY: f64 = 5.0;
/// Per-percent penalty for humidity deviation.
const HUMIDITY_SENSITIVITY: f64 = 1.5;
/// Per-mm penalty for rainfall deviation.
const RAINFALL_SENSITIVITY: f64 = 3.0;
/// Per-hour penalty for sunlight deviation.
const SUNLIGHT_SENSITIVITY: f64 = 10.0;

const TEMPERATURE_WEIGHT: f64 = 0.3;
const HUMIDITY_WEIGHT: f64 = 0.2;
const RAINFALL_WEIGHT: f64 = 0.3;
const SUNLIGHT_WEIGHT: f64 = 0.2;

/// Score how well current conditions match a crop's optimal profile.
///
/// Each climate reading contributes a term `100 - min(100, |deviation| *
/// sensitivity)`; the weighted combination is scaled by the crop's
/// compatibility with the soil and rounded to the nearest integer in
/// `0..=100`.
///
/// Pure function of its inputs. Panics if `soil.id` is outside the
/// compatibility table, which is a caller contract violation.
pub fn health_score(crop: &Crop, soil: &SoilType, env: &EnvironmentalFactors) -> u8 {
    let temperature_term = deviation_term(
        env.temperature,
        crop.optimal_conditions.temperature,
        TEMPERATURE_SENSITIVITY,
    );
    let humidity_term = deviation_term(
        env.humidity,
        crop.optimal_conditions.humidity,
        HUMIDITY_SENSITIVITY,
    );
    let rainfall_term = deviation_term(
        env.rainfall,
        crop.optimal_conditions.rainfall,
        RAINFALL_SENSITIVITY,
    );
    let sunlight_term = deviation_term(
        env.sunlight,
        crop.optimal_conditions.sunlight,
        SUNLIGHT_SENSITIVITY,
    );

    let base_score = temperature_term * TEMPERATURE_WEIGHT
        + humidity_term * HUMIDITY_WEIGHT
        + rainfall_term * RAINFALL_WEIGHT
        + sunlight_term * SUNLIGHT_WEIGHT;

    let compatibility = crop.soil_compatibility[(soil.id - 1) as usize];
    (base_score * compatibility).round() as u8
}

fn deviation_term(actual: f64, optimal: f64, sensitivity: f64) -> f64 {
    100.0 - ((actual - optimal).abs() * sensitivity).min(100.0)
}
