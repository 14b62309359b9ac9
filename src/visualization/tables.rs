use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table,
};

use crate::analysis::StrategySummary;
use crate::catalog::StrategyInfo;
use crate::engine::{ScheduleSource, SimulationCoordinator};
use crate::models::{Crop, SoilType, WeekPlan, WeeklySchedule};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format the crop catalog as a string.
pub fn format_crop_table(crops: &[Crop]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Crop Catalog".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = base_table();
    table.set_header(vec![
        "Crop",
        "Days",
        "Base Yield",
        "Optimal Temp",
        "Optimal Humidity",
        "Optimal Rain",
        "Optimal Sun",
    ]);

    for crop in crops {
        table.add_row(vec![
            Cell::new(&crop.name),
            Cell::new(format!("{}", crop.growth_duration_days)),
            Cell::new(format!("{:.0} kg/ha", crop.base_yield)),
            Cell::new(format!("{:.0} °C", crop.optimal_conditions.temperature)),
            Cell::new(format!("{:.0}%", crop.optimal_conditions.humidity)),
            Cell::new(format!("{:.0} mm/wk", crop.optimal_conditions.rainfall)),
            Cell::new(format!("{:.0} h/day", crop.optimal_conditions.sunlight)),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the crop catalog table.
pub fn print_crop_table(crops: &[Crop]) {
    print!("{}", format_crop_table(crops));
}

/// Format the soil catalog as a string.
pub fn format_soil_table(soils: &[SoilType]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Soil Types".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = base_table();
    table.set_header(vec![
        "Soil",
        "Water Retention",
        "Nutrient Retention",
        "Yield Multiplier",
    ]);

    for soil in soils {
        table.add_row(vec![
            Cell::new(&soil.name),
            Cell::new(format!("{:.1}", soil.water_retention)),
            Cell::new(format!("{:.1}", soil.nutrient_retention)),
            Cell::new(format!("{:.1}x", soil.yield_multiplier)),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the soil catalog table.
pub fn print_soil_table(soils: &[SoilType]) {
    print!("{}", format_soil_table(soils));
}

/// Format the advertised strategy catalog as a string.
pub fn format_strategy_table(strategies: &[StrategyInfo]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Scheduling Strategies".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = base_table();
    table.set_header(vec!["Id", "Name", "Best For"]);
    for strategy in strategies {
        table.add_row(vec![
            Cell::new(&strategy.id),
            Cell::new(&strategy.name),
            Cell::new(&strategy.best_for),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the strategy catalog table.
pub fn print_strategy_table(strategies: &[StrategyInfo]) {
    print!("{}", format_strategy_table(strategies));
}

/// Format a week-level view of the schedule as a string.
pub fn format_schedule_table(schedule: &WeeklySchedule) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Application Schedule".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    if schedule.weeks.is_empty() {
        output.push_str("No weeks scheduled.\n");
        return output;
    }

    let mut table = base_table();
    table.set_header(vec![
        "Week",
        "Stage",
        "Water Total",
        "Fertilizer Total",
        "Water Days",
        "Fertilizer Days",
    ]);

    for week in &schedule.weeks {
        table.add_row(vec![
            Cell::new(format!("{}", week.week)),
            Cell::new(week.stage.to_string()),
            Cell::new(format!("{:.1} mm", week.water_total)),
            Cell::new(format!("{:.1} kg", week.fertilizer_total)),
            Cell::new(format!("{}", week.water_days())),
            Cell::new(format!("{}", week.fertilizer_days())),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the week-level schedule table.
pub fn print_schedule_table(schedule: &WeeklySchedule) {
    print!("{}", format_schedule_table(schedule));
}

/// Format the day-by-day detail for one week as a string.
pub fn format_week_detail(week: &WeekPlan) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        format!("Week {} ({})", week.week, week.stage).bold().cyan()
    ));

    let mut table = base_table();
    table.set_header(vec!["Day", "Water (mm)", "Fertilizer (kg)"]);
    for day in &week.days {
        table.add_row(vec![
            Cell::new(format!("{}", day.day)),
            Cell::new(format!("{:.2}", day.water)),
            Cell::new(format!("{:.2}", day.fertilizer)),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the day-by-day detail for one week.
pub fn print_week_detail(week: &WeekPlan) {
    print!("{}", format_week_detail(week));
}

/// Format the current simulation state (health, forecast, schedule origin)
/// as a string.
pub fn format_simulation_summary(coordinator: &SimulationCoordinator) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Simulation Summary".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = base_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Crop"),
        Cell::new(&coordinator.crop().name),
    ]);
    table.add_row(vec![
        Cell::new("Soil"),
        Cell::new(&coordinator.soil().name),
    ]);
    table.add_row(vec![
        Cell::new("Starting Stage"),
        Cell::new(coordinator.growth_stage().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Strategy"),
        Cell::new(coordinator.algorithm_id()),
    ]);
    table.add_row(vec![
        Cell::new("Health Score"),
        Cell::new(format!("{}/100", coordinator.health_score())),
    ]);
    table.add_row(vec![
        Cell::new("Yield Forecast"),
        Cell::new(format!("{:.0} kg/ha", coordinator.yield_forecast())),
    ]);
    table.add_row(vec![
        Cell::new("Schedule Source"),
        Cell::new(match coordinator.schedule_source() {
            ScheduleSource::Local => "local heuristic",
            ScheduleSource::External => "external optimizer",
        }),
    ]);
    output.push_str(&format!("{table}"));

    if let Some(error) = coordinator.last_optimization_error() {
        output.push_str(&format!(
            "\n{} {}\n",
            "Last optimization failed:".bold().red(),
            error
        ));
    }
    output
}

/// Print the simulation summary.
pub fn print_simulation_summary(coordinator: &SimulationCoordinator) {
    print!("{}", format_simulation_summary(coordinator));
}

/// Format the strategy comparison as a string.
pub fn format_comparison_table(summaries: &[StrategySummary]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Strategy Comparison".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = base_table();
    table.set_header(vec![
        "Strategy",
        "Weeks",
        "Water Days/Wk",
        "Fert Days/Wk",
        "Water Applied",
        "Fertilizer Applied",
        "Water 95% CI",
    ]);

    for summary in summaries {
        let interval = match &summary.water_interval {
            Some(ci) => format!("{:.1} to {:.1}", ci.lower, ci.upper),
            None => "deterministic".to_string(),
        };
        table.add_row(vec![
            Cell::new(&summary.id),
            Cell::new(format!("{}", summary.weeks)),
            Cell::new(format!("{:.1}", summary.water_days_per_week)),
            Cell::new(format!("{:.1}", summary.fertilizer_days_per_week)),
            Cell::new(format!("{:.1} mm", summary.mean_applied_water)),
            Cell::new(format!("{:.1} kg", summary.mean_applied_fertilizer)),
            Cell::new(interval),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the strategy comparison table.
pub fn print_comparison_table(summaries: &[StrategySummary]) {
    print!("{}", format_comparison_table(summaries));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compare_strategies;
    use crate::catalog::{crop_catalog, find_crop, find_soil, soil_catalog, strategy_catalog};
    use crate::engine::generate_schedule_seeded;
    use crate::models::{EnvironmentalFactors, GrowthStage};

    #[test]
    fn test_crop_table_lists_all_crops() {
        let formatted = format_crop_table(&crop_catalog());
        assert!(formatted.contains("Rice"));
        assert!(formatted.contains("Potato"));
        assert!(formatted.contains("Crop Catalog"));
    }

    #[test]
    fn test_soil_table_lists_multipliers() {
        let formatted = format_soil_table(&soil_catalog());
        assert!(formatted.contains("Loamy"));
        assert!(formatted.contains("1.0x"));
        assert!(formatted.contains("0.7x"));
    }

    #[test]
    fn test_strategy_table_includes_greedy() {
        let formatted = format_strategy_table(&strategy_catalog());
        assert!(formatted.contains("greedy"));
        assert!(formatted.contains("Constraint Satisfaction"));
    }

    #[test]
    fn test_schedule_table_rows() {
        let schedule = generate_schedule_seeded(
            &find_crop("rice").unwrap(),
            GrowthStage::Ripening,
            &EnvironmentalFactors::default(),
            "csp",
            0,
        );
        let formatted = format_schedule_table(&schedule);
        assert!(formatted.contains("Ripening"));
        assert!(formatted.contains("Application Schedule"));
    }

    #[test]
    fn test_schedule_table_empty() {
        let formatted = format_schedule_table(&WeeklySchedule::default());
        assert!(formatted.contains("No weeks scheduled"));
    }

    #[test]
    fn test_week_detail_has_seven_rows() {
        let schedule = generate_schedule_seeded(
            &find_crop("rice").unwrap(),
            GrowthStage::Vegetative,
            &EnvironmentalFactors::default(),
            "astar",
            0,
        );
        let formatted = format_week_detail(schedule.first_week().unwrap());
        for day in 1..=7 {
            assert!(formatted.contains(&format!("{day}")));
        }
    }

    #[test]
    fn test_simulation_summary() {
        let coordinator = SimulationCoordinator::new(
            find_crop("rice").unwrap(),
            find_soil("loamy").unwrap(),
        )
        .with_seed(1);
        let formatted = format_simulation_summary(&coordinator);
        assert!(formatted.contains("82/100"));
        assert!(formatted.contains("3690 kg/ha"));
        assert!(formatted.contains("local heuristic"));
    }

    #[test]
    fn test_comparison_table() {
        let summaries = compare_strategies(
            &find_crop("rice").unwrap(),
            GrowthStage::Vegetative,
            &EnvironmentalFactors::default(),
            3,
            1,
        )
        .unwrap();
        let formatted = format_comparison_table(&summaries);
        assert!(formatted.contains("genetic"));
        assert!(formatted.contains("deterministic"));
    }
}
