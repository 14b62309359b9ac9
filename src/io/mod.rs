mod export;
mod scenario;

use std::path::Path;

use crate::error::FarmError;

pub use export::{write_schedule_csv, write_schedule_json};
pub use scenario::{
    read_scenario_json, read_scenario_toml, write_scenario_json, write_scenario_toml, Scenario,
};

/// Trait for reading a scenario from a file.
pub trait ScenarioReader {
    fn read(&self, path: &Path) -> Result<Scenario, FarmError>;
}

/// Trait for writing a scenario to a file.
pub trait ScenarioWriter {
    fn write(&self, scenario: &Scenario, path: &Path) -> Result<(), FarmError>;
}

/// JSON scenario reader/writer.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl ScenarioReader for JsonFormat {
    fn read(&self, path: &Path) -> Result<Scenario, FarmError> {
        read_scenario_json(path)
    }
}

impl ScenarioWriter for JsonFormat {
    fn write(&self, scenario: &Scenario, path: &Path) -> Result<(), FarmError> {
        write_scenario_json(scenario, path, self.pretty)
    }
}

/// TOML scenario reader/writer.
pub struct TomlFormat;

impl ScenarioReader for TomlFormat {
    fn read(&self, path: &Path) -> Result<Scenario, FarmError> {
        read_scenario_toml(path)
    }
}

impl ScenarioWriter for TomlFormat {
    fn write(&self, scenario: &Scenario, path: &Path) -> Result<(), FarmError> {
        write_scenario_toml(scenario, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_trait_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        let scenario = Scenario::default();

        let writer: &dyn ScenarioWriter = &JsonFormat { pretty: true };
        writer.write(&scenario, &path).unwrap();

        let reader: &dyn ScenarioReader = &JsonFormat::default();
        let loaded = reader.read(&path).unwrap();
        assert_eq!(loaded, scenario);
    }

    #[test]
    fn test_toml_trait_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.toml");
        let scenario = Scenario {
            algorithm: "greedy".to_string(),
            ..Default::default()
        };

        let writer: &dyn ScenarioWriter = &TomlFormat;
        writer.write(&scenario, &path).unwrap();

        let reader: &dyn ScenarioReader = &TomlFormat;
        let loaded = reader.read(&path).unwrap();
        assert_eq!(loaded, scenario);
    }

    #[test]
    fn test_json_format_default() {
        let fmt = JsonFormat::default();
        assert!(!fmt.pretty);
    }
}
