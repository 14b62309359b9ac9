use crate::error::FarmError;
use crate::models::SoilType;

/// Build the built-in soil type catalog.
pub fn soil_catalog() -> Vec<SoilType> {
    vec![
        SoilType {
            id: 1,
            name: "Sandy".to_string(),
            water_retention: 0.4,
            nutrient_retention: 0.3,
            yield_multiplier: 0.7,
            description: "Sandy soil has large particles with good drainage but poor \
                          nutrient retention."
                .to_string(),
        },
        SoilType {
            id: 2,
            name: "Loamy".to_string(),
            water_retention: 0.8,
            nutrient_retention: 0.8,
            yield_multiplier: 1.0,
            description: "Loamy soil is ideal with balanced properties, good drainage and \
                          nutrient retention."
                .to_string(),
        },
        SoilType {
            id: 3,
            name: "Clay".to_string(),
            water_retention: 0.9,
            nutrient_retention: 0.9,
            yield_multiplier: 0.8,
            description: "Clay soil has small particles with excellent nutrient retention \
                          but poor drainage."
                .to_string(),
        },
    ]
}

/// Look up a soil type by its case-insensitive name.
pub fn find_soil(name: &str) -> Result<SoilType, FarmError> {
    let lower = name.to_lowercase();
    soil_catalog()
        .into_iter()
        .find(|s| s.name.to_lowercase() == lower)
        .ok_or_else(|| FarmError::UnknownSoil(name.to_string()))
}

/// Look up a soil type by id.
pub fn find_soil_by_id(id: u32) -> Result<SoilType, FarmError> {
    soil_catalog()
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| FarmError::UnknownSoil(format!("id {id}")))
}
