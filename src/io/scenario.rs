use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{find_crop, find_soil};
use crate::engine::SimulationCoordinator;
use crate::error::FarmError;
use crate::models::{EnvironmentalFactors, GrowthStage, ResourceBudget};

/// A saved simulation setup: selections plus the environmental snapshot.
///
/// Scalar fields come before the nested tables so the TOML form serializes
/// cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Crop name, matched case-insensitively against the catalog
    pub crop: String,
    /// Soil name, matched case-insensitively against the catalog
    pub soil: String,
    /// Stage the plan starts from
    pub growth_stage: GrowthStage,
    /// Strategy identifier
    pub algorithm: String,
    /// Seed for the stochastic strategy; omit for entropy
    pub seed: Option<u64>,
    pub environment: EnvironmentalFactors,
    pub budget: ResourceBudget,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            crop: "Rice".to_string(),
            soil: "Loamy".to_string(),
            growth_stage: GrowthStage::Reproductive,
            algorithm: "csp".to_string(),
            seed: None,
            environment: EnvironmentalFactors::default(),
            budget: ResourceBudget::default(),
        }
    }
}

impl Scenario {
    /// Resolve catalog references and build a coordinator with this
    /// scenario's state, with the initial computation already flushed.
    pub fn into_coordinator(self) -> Result<SimulationCoordinator, FarmError> {
        self.environment.validate()?;
        let crop = find_crop(&self.crop)?;
        let soil = find_soil(&self.soil)?;

        let mut coordinator = SimulationCoordinator::new(crop, soil);
        if let Some(seed) = self.seed {
            coordinator = coordinator.with_seed(seed);
        }
        coordinator.set_growth_stage(self.growth_stage);
        coordinator.set_environment(self.environment);
        coordinator.set_algorithm(self.algorithm);
        coordinator.set_budget(self.budget);
        coordinator.flush();
        Ok(coordinator)
    }
}

/// Read a scenario from a JSON file.
pub fn read_scenario_json(path: &Path) -> Result<Scenario, FarmError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write a scenario to a JSON file.
pub fn write_scenario_json(scenario: &Scenario, path: &Path, pretty: bool) -> Result<(), FarmError> {
    let contents = if pretty {
        serde_json::to_string_pretty(scenario)?
    } else {
        serde_json::to_string(scenario)?
    };
    fs::write(path, contents)?;
    Ok(())
}

/// Read a scenario from a TOML file.
pub fn read_scenario_toml(path: &Path) -> Result<Scenario, FarmError> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Write a scenario to a TOML file.
pub fn write_scenario_toml(scenario: &Scenario, path: &Path) -> Result<(), FarmError> {
    let contents = toml::to_string_pretty(scenario)?;
    fs::write(path, contents)?;
    Ok(())
}
