use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::catalog::strategy_catalog;
use crate::engine::{generate_schedule_seeded, Strategy};
use crate::error::FarmError;
use crate::models::{Crop, EnvironmentalFactors, GrowthStage};

/// Confidence interval for a metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub mean: f64,
    pub std_error: f64,
    pub lower: f64,
    pub upper: f64,
    pub confidence_level: f64,
    pub sample_size: usize,
}

/// Summary of one strategy's output over identical inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySummary {
    /// Strategy identifier as advertised
    pub id: String,
    /// Display name
    pub name: String,
    /// Scheduled weeks
    pub weeks: usize,
    /// Mean nonzero water days per week
    pub water_days_per_week: f64,
    /// Mean nonzero fertilizer days per week
    pub fertilizer_days_per_week: f64,
    /// Mean total water applied across runs (mm)
    pub mean_applied_water: f64,
    /// Mean total fertilizer applied across runs (kg)
    pub mean_applied_fertilizer: f64,
    /// Spread of per-run water totals; only stochastic strategies vary
    pub water_interval: Option<ConfidenceInterval>,
}

/// Compare every advertised strategy on identical inputs.
///
/// Deterministic strategies are generated once. The stochastic one is run
/// `runs` times with seeds derived from `seed`, and its per-run water totals
/// are summarized with a 95% Student-t confidence interval. `runs` must be
/// at least 2.
pub fn compare_strategies(
    crop: &Crop,
    from_stage: GrowthStage,
    env: &EnvironmentalFactors,
    runs: usize,
    seed: u64,
) -> Result<Vec<StrategySummary>, FarmError> {
    if runs < 2 {
        return Err(FarmError::InsufficientData(
            "Need at least 2 runs for strategy comparison".to_string(),
        ));
    }

    strategy_catalog()
        .into_iter()
        .map(|info| {
            let effective_runs = if Strategy::resolve(&info.id).is_stochastic() {
                runs
            } else {
                1
            };

            let mut water_totals = Vec::with_capacity(effective_runs);
            let mut fertilizer_totals = Vec::with_capacity(effective_runs);
            let mut weeks = 0;
            let mut water_days = 0usize;
            let mut fertilizer_days = 0usize;

            for run in 0..effective_runs {
                let schedule =
                    generate_schedule_seeded(crop, from_stage, env, &info.id, seed + run as u64);
                weeks = schedule.num_weeks();
                water_days += schedule.weeks.iter().map(|w| w.water_days()).sum::<usize>();
                fertilizer_days += schedule
                    .weeks
                    .iter()
                    .map(|w| w.fertilizer_days())
                    .sum::<usize>();
                water_totals.push(schedule.total_applied_water());
                fertilizer_totals.push(schedule.total_applied_fertilizer());
            }

            let mean = |values: &[f64]| values.iter().sum::<f64>() / values.len() as f64;
            let per_week = |total: usize| {
                if weeks == 0 {
                    0.0
                } else {
                    total as f64 / (effective_runs * weeks) as f64
                }
            };

            let water_interval = if effective_runs >= 2 {
                Some(compute_ci(&water_totals, 0.95)?)
            } else {
                None
            };

            Ok(StrategySummary {
                id: info.id,
                name: info.name,
                weeks,
                water_days_per_week: per_week(water_days),
                fertilizer_days_per_week: per_week(fertilizer_days),
                mean_applied_water: mean(&water_totals),
                mean_applied_fertilizer: mean(&fertilizer_totals),
                water_interval,
            })
        })
        .collect()
}

/// Compute a confidence interval from a set of values.
fn compute_ci(values: &[f64], confidence: f64) -> Result<ConfidenceInterval, FarmError> {
    let n = values.len();
    if n < 2 {
        return Err(FarmError::InsufficientData(
            "Need at least 2 observations".to_string(),
        ));
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std_error = variance.sqrt() / (n as f64).sqrt();

    let df = (n - 1) as f64;
    let alpha = 1.0 - confidence;
    let t_dist =
        StudentsT::new(0.0, 1.0, df).map_err(|e| FarmError::AnalysisError(e.to_string()))?;
    let t_value = t_dist.inverse_cdf(1.0 - alpha / 2.0);

    let margin = t_value * std_error;
    Ok(ConfidenceInterval {
        mean,
        std_error,
        lower: mean - margin,
        upper: mean + margin,
        confidence_level: confidence,
        sample_size: n,
    })
}
