use serde::{Deserialize, Serialize};

use super::GrowthStage;

/// Planned resource applications for a single day of a week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day of the week, 1-7
    pub day: u8,
    /// Water to apply (mm)
    pub water: f64,
    /// Fertilizer to apply (kg)
    pub fertilizer: f64,
}

impl DayPlan {
    /// Whether any resource is applied on this day.
    pub fn has_application(&self) -> bool {
        self.water > 0.0 || self.fertilizer > 0.0
    }
}

/// Planned resource applications for a single week of the growth cycle.
///
/// Serde field names match the external optimizer wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// 1-based week number within the full growth cycle
    pub week: u32,
    /// Growth stage the week falls in
    pub stage: GrowthStage,
    /// Adjusted weekly water total (mm)
    #[serde(rename = "waterTotal")]
    pub water_total: f64,
    /// Weekly fertilizer total (kg)
    #[serde(rename = "fertilizerTotal")]
    pub fertilizer_total: f64,
    /// Seven day plans, day 1 through 7
    pub days: Vec<DayPlan>,
}

impl WeekPlan {
    /// Days of the week with a nonzero water application.
    pub fn water_days(&self) -> usize {
        self.days.iter().filter(|d| d.water > 0.0).count()
    }

    /// Days of the week with a nonzero fertilizer application.
    pub fn fertilizer_days(&self) -> usize {
        self.days.iter().filter(|d| d.fertilizer > 0.0).count()
    }

    /// Sum of daily water applications (mm).
    pub fn applied_water(&self) -> f64 {
        self.days.iter().map(|d| d.water).sum()
    }

    /// Sum of daily fertilizer applications (kg).
    pub fn applied_fertilizer(&self) -> f64 {
        self.days.iter().map(|d| d.fertilizer).sum()
    }
}

/// The full application plan for a growth cycle, filtered to the
/// caller-selected starting stage.
///
/// Weeks are ordered by ascending week number; weeks before the selected
/// stage are absent, not zeroed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    pub weeks: Vec<WeekPlan>,
}

impl WeeklySchedule {
    /// Number of scheduled weeks.
    pub fn num_weeks(&self) -> usize {
        self.weeks.len()
    }

    /// Total water applied across all scheduled days (mm).
    pub fn total_applied_water(&self) -> f64 {
        self.weeks.iter().map(|w| w.applied_water()).sum()
    }

    /// Total fertilizer applied across all scheduled days (kg).
    pub fn total_applied_fertilizer(&self) -> f64 {
        self.weeks.iter().map(|w| w.applied_fertilizer()).sum()
    }

    /// First scheduled week, if any.
    pub fn first_week(&self) -> Option<&WeekPlan> {
        self.weeks.first()
    }
}
