use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use farm_plot_simulator::{
    analysis::compare_strategies,
    catalog::{crop_catalog, find_crop, find_soil, soil_catalog, strategy_catalog},
    engine::{forecast_yield, generate_schedule_seeded, health_score},
    io::{
        read_scenario_json, read_scenario_toml, write_schedule_csv, write_schedule_json, Scenario,
    },
    models::{EnvironmentalFactors, GrowthStage},
    visualization::{
        print_comparison_table, print_crop_table, print_schedule_table, print_simulation_summary,
        print_soil_table, print_strategy_table, print_week_detail,
    },
};

#[derive(Parser)]
#[command(
    name = "farm-simulator",
    about = "Farm Plot Simulator - crop health scoring, resource scheduling, and yield forecasting",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Environmental readings shared by the computation subcommands. Defaults
/// match the reference dashboard's initial state.
#[derive(Args)]
struct EnvArgs {
    /// Temperature in °C
    #[arg(long, default_value = "25.0")]
    temperature: f64,

    /// Relative humidity in %
    #[arg(long, default_value = "65.0")]
    humidity: f64,

    /// Rainfall in mm/week
    #[arg(long, default_value = "20.0")]
    rainfall: f64,

    /// Sunlight in hours/day
    #[arg(long, default_value = "6.0")]
    sunlight: f64,

    /// Wind speed in km/h
    #[arg(long, default_value = "10.0")]
    wind_speed: f64,
}

impl EnvArgs {
    fn into_environment(self) -> EnvironmentalFactors {
        EnvironmentalFactors {
            temperature: self.temperature,
            humidity: self.humidity,
            rainfall: self.rainfall,
            sunlight: self.sunlight,
            wind_speed: self.wind_speed,
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the crop catalog
    Crops,

    /// List the soil type catalog
    Soils,

    /// List the advertised scheduling strategies
    Algorithms,

    /// Score crop health against current conditions
    Health {
        /// Crop name (e.g. rice)
        #[arg(short, long)]
        crop: String,

        /// Soil type name (e.g. loamy)
        #[arg(short, long, default_value = "loamy")]
        soil: String,

        #[command(flatten)]
        env: EnvArgs,
    },

    /// Forecast harvest yield from the health score
    Forecast {
        /// Crop name
        #[arg(short, long)]
        crop: String,

        /// Soil type name
        #[arg(short, long, default_value = "loamy")]
        soil: String,

        #[command(flatten)]
        env: EnvArgs,
    },

    /// Generate the week-by-week application schedule
    Schedule {
        /// Crop name
        #[arg(short, long)]
        crop: String,

        /// Stage to start the plan from: vegetative, reproductive, or ripening
        #[arg(short = 'g', long, default_value = "vegetative")]
        stage: String,

        /// Strategy identifier (astar, genetic, csp, greedy)
        #[arg(short, long, default_value = "csp")]
        algorithm: String,

        /// Seed for the stochastic strategy
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Also print the day-by-day detail of the first scheduled week
        #[arg(long)]
        detail: bool,

        /// Export the schedule to a .csv or .json file
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        env: EnvArgs,
    },

    /// Run the full pipeline from a scenario file
    Simulate {
        /// Path to a .json or .toml scenario file
        #[arg(short, long)]
        scenario: PathBuf,

        /// Export the generated schedule to a .csv or .json file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare every advertised strategy on identical inputs
    Compare {
        /// Crop name
        #[arg(short, long, default_value = "rice")]
        crop: String,

        /// Stage to start the plan from
        #[arg(short = 'g', long, default_value = "vegetative")]
        stage: String,

        /// Runs for the stochastic strategy
        #[arg(short, long, default_value = "10")]
        runs: usize,

        /// Base seed for the stochastic runs
        #[arg(long, default_value = "0")]
        seed: u64,

        #[command(flatten)]
        env: EnvArgs,
    },
}

fn load_scenario(path: &PathBuf) -> Result<Scenario> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "json" => Ok(read_scenario_json(path)?),
        "toml" => Ok(read_scenario_toml(path)?),
        _ => anyhow::bail!("Unsupported scenario format: .{ext}. Use .json or .toml"),
    }
}

fn export_schedule(
    schedule: &farm_plot_simulator::WeeklySchedule,
    path: &PathBuf,
) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => write_schedule_csv(schedule, path)?,
        "json" => write_schedule_json(schedule, path, true)?,
        _ => anyhow::bail!("Unsupported export format: .{ext}. Use .csv or .json"),
    }
    println!("  Exported schedule to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Crops => print_crop_table(&crop_catalog()),

        Commands::Soils => print_soil_table(&soil_catalog()),

        Commands::Algorithms => print_strategy_table(&strategy_catalog()),

        Commands::Health { crop, soil, env } => {
            let crop = find_crop(&crop)?;
            let soil = find_soil(&soil)?;
            let environment = env.into_environment();
            environment.validate()?;

            let score = health_score(&crop, &soil, &environment);
            println!(
                "\n{}",
                format!("Health: {} on {}", crop.name, soil.name).bold().cyan()
            );
            println!("  Health score: {}", format!("{score}/100").bold());
        }

        Commands::Forecast { crop, soil, env } => {
            let crop = find_crop(&crop)?;
            let soil = find_soil(&soil)?;
            let environment = env.into_environment();
            environment.validate()?;

            let score = health_score(&crop, &soil, &environment);
            let forecast = forecast_yield(&crop, &soil, score);
            println!(
                "\n{}",
                format!("Forecast: {} on {}", crop.name, soil.name)
                    .bold()
                    .cyan()
            );
            println!("  Health score:   {score}/100");
            println!("  Yield forecast: {} kg/ha", format!("{forecast:.0}").bold());
        }

        Commands::Schedule {
            crop,
            stage,
            algorithm,
            seed,
            detail,
            output,
            env,
        } => {
            let crop = find_crop(&crop)?;
            let stage: GrowthStage = stage.parse()?;
            let environment = env.into_environment();
            environment.validate()?;

            let schedule = generate_schedule_seeded(&crop, stage, &environment, &algorithm, seed);
            println!(
                "\n{}",
                format!(
                    "Schedule: {} from {} stage using '{}'",
                    crop.name, stage, algorithm
                )
                .bold()
                .cyan()
            );
            print_schedule_table(&schedule);
            if detail {
                if let Some(week) = schedule.first_week() {
                    print_week_detail(week);
                }
            }
            if let Some(path) = output {
                export_schedule(&schedule, &path)?;
            }
        }

        Commands::Simulate { scenario, output } => {
            let scenario = load_scenario(&scenario)?;
            let coordinator = scenario.into_coordinator()?;

            print_simulation_summary(&coordinator);
            print_schedule_table(coordinator.schedule());
            if let Some(path) = output {
                export_schedule(coordinator.schedule(), &path)?;
            }
        }

        Commands::Compare {
            crop,
            stage,
            runs,
            seed,
            env,
        } => {
            let crop = find_crop(&crop)?;
            let stage: GrowthStage = stage.parse()?;
            let environment = env.into_environment();
            environment.validate()?;

            let summaries = compare_strategies(&crop, stage, &environment, runs, seed)?;
            print_comparison_table(&summaries);
        }
    }

    Ok(())
}
