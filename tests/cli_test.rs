use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use farm_plot_simulator::io::{write_scenario_toml, Scenario};
use farm_plot_simulator::models::GrowthStage;

fn cmd() -> Command {
    Command::cargo_bin("farm-simulator").unwrap()
}

// --- catalog listings ---

#[test]
fn test_crops_lists_catalog() {
    cmd()
        .arg("crops")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rice"))
        .stdout(predicate::str::contains("Cotton"))
        .stdout(predicate::str::contains("Crop Catalog"));
}

#[test]
fn test_soils_lists_catalog() {
    cmd()
        .arg("soils")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sandy"))
        .stdout(predicate::str::contains("Loamy"))
        .stdout(predicate::str::contains("Clay"));
}

#[test]
fn test_algorithms_lists_greedy() {
    cmd()
        .arg("algorithms")
        .assert()
        .success()
        .stdout(predicate::str::contains("greedy"))
        .stdout(predicate::str::contains("Genetic Algorithm"));
}

// --- health and forecast ---

#[test]
fn test_health_reference_scenario() {
    cmd()
        .args(["health", "--crop", "rice", "--soil", "loamy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("82/100"));
}

#[test]
fn test_health_unknown_crop_fails() {
    cmd()
        .args(["health", "--crop", "kudzu"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown crop"));
}

#[test]
fn test_health_invalid_environment_fails() {
    cmd()
        .args(["health", "--crop", "rice", "--humidity", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("humidity"));
}

#[test]
fn test_forecast_reference_scenario() {
    cmd()
        .args(["forecast", "--crop", "rice", "--soil", "loamy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3690"));
}

// --- schedule ---

#[test]
fn test_schedule_prints_weeks() {
    cmd()
        .args(["schedule", "--crop", "rice", "--algorithm", "csp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Application Schedule"))
        .stdout(predicate::str::contains("Vegetative"))
        .stdout(predicate::str::contains("Ripening"));
}

#[test]
fn test_schedule_stage_filter() {
    cmd()
        .args(["schedule", "--crop", "rice", "--stage", "ripening"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ripening"))
        .stdout(predicate::str::contains("Vegetative").not());
}

#[test]
fn test_schedule_detail_flag() {
    cmd()
        .args(["schedule", "--crop", "rice", "--detail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 1"))
        .stdout(predicate::str::contains("Water (mm)"));
}

#[test]
fn test_schedule_csv_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("schedule.csv");
    cmd()
        .args(["schedule", "--crop", "tomato", "--output"])
        .arg(&path)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("week,stage,day,water,fertilizer"));
    // Tomato: 90 days -> 12 weeks of 7 day rows
    assert_eq!(contents.lines().count(), 1 + 12 * 7);
}

#[test]
fn test_schedule_unsupported_export_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("schedule.xlsx");
    cmd()
        .args(["schedule", "--crop", "rice", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported export format"));
}

// --- simulate ---

#[test]
fn test_simulate_from_toml_scenario() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scenario.toml");
    let scenario = Scenario {
        growth_stage: GrowthStage::Reproductive,
        seed: Some(0),
        ..Default::default()
    };
    write_scenario_toml(&scenario, &path).unwrap();

    cmd()
        .args(["simulate", "--scenario"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulation Summary"))
        .stdout(predicate::str::contains("82/100"))
        .stdout(predicate::str::contains("3690 kg/ha"));
}

#[test]
fn test_simulate_missing_scenario_fails() {
    cmd()
        .args(["simulate", "--scenario", "/nonexistent/scenario.toml"])
        .assert()
        .failure();
}

#[test]
fn test_simulate_unsupported_scenario_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scenario.yaml");
    std::fs::write(&path, "crop: Rice").unwrap();
    cmd()
        .args(["simulate", "--scenario"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported scenario format"));
}

// --- compare ---

#[test]
fn test_compare_prints_all_strategies() {
    cmd()
        .args(["compare", "--crop", "rice", "--runs", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy Comparison"))
        .stdout(predicate::str::contains("astar"))
        .stdout(predicate::str::contains("genetic"))
        .stdout(predicate::str::contains("csp"))
        .stdout(predicate::str::contains("greedy"));
}

#[test]
fn test_compare_rejects_single_run() {
    cmd()
        .args(["compare", "--crop", "rice", "--runs", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient data"));
}
