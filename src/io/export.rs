use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::FarmError;
use crate::models::WeeklySchedule;

/// One CSV row per scheduled day.
#[derive(Debug, Serialize)]
struct DayRow<'a> {
    week: u32,
    stage: &'a str,
    day: u8,
    water: f64,
    fertilizer: f64,
}

/// Write a schedule as CSV, one row per day.
pub fn write_schedule_csv(schedule: &WeeklySchedule, path: &Path) -> Result<(), FarmError> {
    let mut writer = csv::Writer::from_path(path)?;
    for week in &schedule.weeks {
        let stage = week.stage.to_string();
        for day in &week.days {
            writer.serialize(DayRow {
                week: week.week,
                stage: &stage,
                day: day.day,
                water: day.water,
                fertilizer: day.fertilizer,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write a schedule as JSON in the external wire format.
pub fn write_schedule_json(
    schedule: &WeeklySchedule,
    path: &Path,
    pretty: bool,
) -> Result<(), FarmError> {
    let contents = if pretty {
        serde_json::to_string_pretty(schedule)?
    } else {
        serde_json::to_string(schedule)?
    };
    fs::write(path, contents)?;
    Ok(())
}
