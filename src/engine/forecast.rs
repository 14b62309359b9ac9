use crate::models::{Crop, SoilType};

/// Project harvest yield (kg/ha) from the crop's base yield, the current
/// health score, and the soil's yield multiplier.
///
/// Linear in both the health score and the multiplier; callers round for
/// display.
pub fn forecast_yield(crop: &Crop, soil: &SoilType, health_score: u8) -> f64 {
    crop.base_yield * (health_score as f64 / 100.0) * soil.yield_multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_crop, find_soil};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_reference_scenario() {
        // Rice on loamy at health 82: 4500 * 0.82 * 1.0 = 3690
        let rice = find_crop("rice").unwrap();
        let loamy = find_soil("loamy").unwrap();
        assert_approx_eq!(forecast_yield(&rice, &loamy, 82), 3690.0);
    }

    #[test]
    fn test_zero_health_zero_yield() {
        let rice = find_crop("rice").unwrap();
        let loamy = find_soil("loamy").unwrap();
        assert_eq!(forecast_yield(&rice, &loamy, 0), 0.0);
    }

    #[test]
    fn test_linear_in_health() {
        let rice = find_crop("rice").unwrap();
        let loamy = find_soil("loamy").unwrap();
        let at_40 = forecast_yield(&rice, &loamy, 40);
        let at_80 = forecast_yield(&rice, &loamy, 80);
        assert_approx_eq!(at_80, at_40 * 2.0);
    }

    #[test]
    fn test_linear_in_soil_multiplier() {
        let rice = find_crop("rice").unwrap();
        let sandy = find_soil("sandy").unwrap(); // 0.7
        let loamy = find_soil("loamy").unwrap(); // 1.0
        let on_loamy = forecast_yield(&rice, &loamy, 75);
        let on_sandy = forecast_yield(&rice, &sandy, 75);
        assert_approx_eq!(on_sandy, on_loamy * 0.7);
    }

    #[test]
    fn test_full_health_equals_base_times_multiplier() {
        let maize = find_crop("maize").unwrap();
        let clay = find_soil("clay").unwrap();
        assert_approx_eq!(forecast_yield(&maize, &clay, 100), 6000.0 * 0.8);
    }
}
