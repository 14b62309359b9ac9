use crate::error::FarmError;
use crate::models::{Crop, OptimalConditions};

/// Build the built-in crop catalog.
///
/// Profiles are reference data created once at process start and never
/// mutated.
pub fn crop_catalog() -> Vec<Crop> {
    vec![
        Crop {
            id: 1,
            name: "Rice".to_string(),
            growth_duration_days: 120,
            base_yield: 4500.0,
            water_requirements: [30.0, 45.0, 35.0],
            fertilizer_requirements: [12.0, 22.0, 15.0],
            optimal_conditions: OptimalConditions {
                temperature: 25.0,
                humidity: 80.0,
                rainfall: 25.0,
                sunlight: 6.0,
            },
            soil_compatibility: [0.7, 0.9, 0.6],
            description: "A staple grain that thrives in wet conditions, particularly suited \
                          to loamy soil and warm temperatures."
                .to_string(),
        },
        Crop {
            id: 2,
            name: "Maize".to_string(),
            growth_duration_days: 100,
            base_yield: 6000.0,
            water_requirements: [25.0, 40.0, 20.0],
            fertilizer_requirements: [18.0, 25.0, 10.0],
            optimal_conditions: OptimalConditions {
                temperature: 24.0,
                humidity: 65.0,
                rainfall: 20.0,
                sunlight: 8.0,
            },
            soil_compatibility: [0.8, 0.9, 0.7],
            description: "A versatile crop that adapts well to various soil types, requiring \
                          moderate water and good sunlight."
                .to_string(),
        },
        Crop {
            id: 3,
            name: "Wheat".to_string(),
            growth_duration_days: 120,
            base_yield: 3500.0,
            water_requirements: [20.0, 35.0, 15.0],
            fertilizer_requirements: [15.0, 18.0, 8.0],
            optimal_conditions: OptimalConditions {
                temperature: 21.0,
                humidity: 60.0,
                rainfall: 15.0,
                sunlight: 7.0,
            },
            soil_compatibility: [0.7, 0.9, 0.8],
            description: "A hardy grain crop that can withstand cooler temperatures and \
                          prefers well-drained loamy soils."
                .to_string(),
        },
        Crop {
            id: 4,
            name: "Tomato".to_string(),
            growth_duration_days: 90,
            base_yield: 35000.0,
            water_requirements: [15.0, 30.0, 25.0],
            fertilizer_requirements: [20.0, 25.0, 15.0],
            optimal_conditions: OptimalConditions {
                temperature: 24.0,
                humidity: 70.0,
                rainfall: 15.0,
                sunlight: 8.0,
            },
            soil_compatibility: [0.6, 0.9, 0.7],
            description: "A popular vegetable crop that thrives in warm weather and requires \
                          regular watering and nutrient-rich soil."
                .to_string(),
        },
        Crop {
            id: 5,
            name: "Cotton".to_string(),
            growth_duration_days: 160,
            base_yield: 2500.0,
            water_requirements: [20.0, 35.0, 25.0],
            fertilizer_requirements: [15.0, 22.0, 12.0],
            optimal_conditions: OptimalConditions {
                temperature: 27.0,
                humidity: 60.0,
                rainfall: 15.0,
                sunlight: 9.0,
            },
            soil_compatibility: [0.8, 0.9, 0.7],
            description: "A fiber crop that performs well in warm climates with moderate \
                          water and well-drained soils."
                .to_string(),
        },
        Crop {
            id: 6,
            name: "Potato".to_string(),
            growth_duration_days: 100,
            base_yield: 25000.0,
            water_requirements: [25.0, 35.0, 20.0],
            fertilizer_requirements: [15.0, 20.0, 10.0],
            optimal_conditions: OptimalConditions {
                temperature: 20.0,
                humidity: 75.0,
                rainfall: 18.0,
                sunlight: 6.0,
            },
            soil_compatibility: [0.7, 0.9, 0.6],
            description: "A root vegetable that prefers cool temperatures and does best in \
                          loose, well-drained soil rich in organic matter."
                .to_string(),
        },
    ]
}

/// Look up a crop by its case-insensitive name.
pub fn find_crop(name: &str) -> Result<Crop, FarmError> {
    let lower = name.to_lowercase();
    crop_catalog()
        .into_iter()
        .find(|c| c.name.to_lowercase() == lower)
        .ok_or_else(|| FarmError::UnknownCrop(name.to_string()))
}

/// Look up a crop by id.
pub fn find_crop_by_id(id: u32) -> Result<Crop, FarmError> {
    crop_catalog()
        .into_iter()
        .find(|c| c.id == id)
        .ok_or_else(|| FarmError::UnknownCrop(format!("id {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_crops() {
        assert_eq!(crop_catalog().len(), 6);
    }

    #[test]
    fn test_catalog_ids_unique_and_sequential() {
        let crops = crop_catalog();
        for (i, crop) in crops.iter().enumerate() {
            assert_eq!(crop.id, i as u32 + 1);
        }
    }

    #[test]
    fn test_all_profiles_validate() {
        for crop in crop_catalog() {
            crop.validate().unwrap();
        }
    }

    #[test]
    fn test_find_crop_case_insensitive() {
        assert_eq!(find_crop("rice").unwrap().id, 1);
        assert_eq!(find_crop("RICE").unwrap().id, 1);
        assert_eq!(find_crop("Tomato").unwrap().id, 4);
    }

    #[test]
    fn test_find_crop_unknown() {
        let err = find_crop("kudzu").unwrap_err();
        assert!(matches!(err, FarmError::UnknownCrop(_)));
    }

    #[test]
    fn test_find_crop_by_id() {
        assert_eq!(find_crop_by_id(5).unwrap().name, "Cotton");
        assert!(find_crop_by_id(99).is_err());
    }

    #[test]
    fn test_rice_profile_values() {
        let rice = find_crop("rice").unwrap();
        assert_eq!(rice.growth_duration_days, 120);
        assert_eq!(rice.base_yield, 4500.0);
        assert_eq!(rice.water_requirements, [30.0, 45.0, 35.0]);
        assert_eq!(rice.fertilizer_requirements, [12.0, 22.0, 15.0]);
        assert_eq!(rice.optimal_conditions.humidity, 80.0);
        assert_eq!(rice.soil_compatibility, [0.7, 0.9, 0.6]);
    }
}
