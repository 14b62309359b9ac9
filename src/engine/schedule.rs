use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::Strategy;
use crate::models::{Crop, DayPlan, EnvironmentalFactors, GrowthStage, WeekPlan, WeeklySchedule};

const DAYS_PER_WEEK: usize = 7;

/// Generate the week-by-week application plan for a crop's growth cycle.
///
/// The cycle is divided into whole weeks; a cycle length that is not a
/// multiple of 7 truncates to the whole-week count, while the stage
/// boundaries at 1/3 and 2/3 are evaluated against the fractional week
/// count. Weeks whose stage precedes `from_stage` are omitted from the
/// output entirely.
///
/// Weekly water is reduced by current rainfall and humidity; fertilizer
/// totals come straight from the per-stage requirement. The daily split of
/// those totals is the strategy's choice. Only the `Genetic` strategy reads
/// from `rng`; pass a seeded generator for reproducible output.
pub fn generate_schedule<R: Rng>(
    crop: &Crop,
    from_stage: GrowthStage,
    env: &EnvironmentalFactors,
    strategy: Strategy,
    rng: &mut R,
) -> WeeklySchedule {
    let week_count = crop.growth_duration_days as f64 / 7.0;
    let whole_weeks = week_count as usize;

    let mut weeks = Vec::with_capacity(whole_weeks);
    for w in 0..whole_weeks {
        let stage = stage_for_week(w, week_count);
        if stage < from_stage {
            continue;
        }

        let rain_adjustment = 1.0 - env.rainfall / 100.0;
        let humidity_adjustment = 1.0 - env.humidity / 200.0;
        let weekly_water =
            crop.water_requirement(stage) * rain_adjustment * humidity_adjustment;
        let weekly_fertilizer = crop.fertilizer_requirement(stage);

        let days = match strategy {
            Strategy::Csp => distribute_even(weekly_water, weekly_fertilizer),
            Strategy::Genetic => distribute_random(weekly_water, weekly_fertilizer, rng),
            Strategy::Astar => distribute_concentrated(weekly_water, weekly_fertilizer),
        };

        weeks.push(WeekPlan {
            week: w as u32 + 1,
            stage,
            water_total: round1(weekly_water),
            fertilizer_total: round1(weekly_fertilizer),
            days,
        });
    }

    WeeklySchedule { weeks }
}

/// Resolve an algorithm identifier and generate with a seeded random source.
///
/// Identical inputs and seed always produce an identical schedule.
pub fn generate_schedule_seeded(
    crop: &Crop,
    from_stage: GrowthStage,
    env: &EnvironmentalFactors,
    algorithm_id: &str,
    seed: u64,
) -> WeeklySchedule {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_schedule(crop, from_stage, env, Strategy::resolve(algorithm_id), &mut rng)
}

/// Stage for a 0-based week index, with boundaries at thirds of the
/// fractional week count.
fn stage_for_week(week: usize, week_count: f64) -> GrowthStage {
    let w = week as f64;
    if w < week_count / 3.0 {
        GrowthStage::Vegetative
    } else if w < 2.0 * week_count / 3.0 {
        GrowthStage::Reproductive
    } else {
        GrowthStage::Ripening
    }
}

/// Even spread: water every other day, fertilizer on days 2, 4, and 6.
///
/// Day values stay zero when the weekly total is not positive, e.g. when
/// rainfall above 100 mm/week drives the water adjustment negative.
fn distribute_even(weekly_water: f64, weekly_fertilizer: f64) -> Vec<DayPlan> {
    (0..DAYS_PER_WEEK)
        .map(|d| {
            let water = if d % 2 == 0 && weekly_water > 0.0 {
                weekly_water / 3.5
            } else {
                0.0
            };
            let fertilizer = if (d == 1 || d == 3 || d == 5) && weekly_fertilizer > 0.0 {
                weekly_fertilizer / 3.0
            } else {
                0.0
            };
            DayPlan {
                day: d as u8 + 1,
                water: round2(water),
                fertilizer: round2(fertilizer),
            }
        })
        .collect()
}

/// Stochastic spread: independent per-day draws for each resource.
fn distribute_random<R: Rng>(
    weekly_water: f64,
    weekly_fertilizer: f64,
    rng: &mut R,
) -> Vec<DayPlan> {
    (0..DAYS_PER_WEEK)
        .map(|d| {
            let mut water = 0.0;
            let mut fertilizer = 0.0;
            if rng.gen::<f64>() > 0.5 && weekly_water > 0.0 {
                water = weekly_water * (0.1 + rng.gen::<f64>() * 0.3);
            }
            if rng.gen::<f64>() > 0.7 && weekly_fertilizer > 0.0 {
                fertilizer = weekly_fertilizer * (0.2 + rng.gen::<f64>() * 0.4);
            }
            DayPlan {
                day: d as u8 + 1,
                water: round2(water),
                fertilizer: round2(fertilizer),
            }
        })
        .collect()
}

/// Concentrated spread: water on days 3 and 6, the full fertilizer total on
/// day 4.
fn distribute_concentrated(weekly_water: f64, weekly_fertilizer: f64) -> Vec<DayPlan> {
    (0..DAYS_PER_WEEK)
        .map(|d| {
            let water = if (d == 2 || d == 5) && weekly_water > 0.0 {
                weekly_water / 2.0
            } else {
                0.0
            };
            let fertilizer = if d == 3 && weekly_fertilizer > 0.0 {
                weekly_fertilizer
            } else {
                0.0
            };
            DayPlan {
                day: d as u8 + 1,
                water: round2(water),
                fertilizer: round2(fertilizer),
            }
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
