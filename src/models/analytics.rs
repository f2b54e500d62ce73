//! Workout aggregation for the analytics endpoints.
//!
//! These are pure functions over a fetched workout list. Keeping the
//! aggregation out of the handlers makes the grouping logic unit-testable
//! without a database.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Workout, WorkoutDetails};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Per-calendar-day totals.
#[derive(Debug, Clone, Serialize)]
pub struct DailyStat {
    /// "YYYY-MM-DD"
    pub date: String,
    pub calories: u32,
    pub duration: u32,
    pub workouts: u32,
}

/// Workout counts by variant.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TypeStats {
    pub cardio: u32,
    pub strength: u32,
}

/// Period-wide totals and averages.
#[derive(Debug, Clone, Serialize)]
pub struct TotalStats {
    pub total_workouts: u32,
    pub total_calories: u32,
    pub total_duration: u32,
    pub average_calories: u32,
    pub average_duration: u32,
}

/// Full summary report for a period.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub daily_data: Vec<DailyStat>,
    pub type_stats: TypeStats,
    pub total_stats: TotalStats,
}

/// One month's totals for the yearly progress chart.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyStat {
    /// "Jan".."Dec"
    pub month: &'static str,
    pub total_workouts: u32,
    pub total_calories: u32,
    pub total_duration: u32,
}

/// Aggregate workouts into daily, per-type, and overall totals.
pub fn summarize(workouts: &[Workout]) -> Summary {
    // BTreeMap keeps daily_data sorted by calendar day.
    let mut daily: BTreeMap<String, DailyStat> = BTreeMap::new();
    let mut type_stats = TypeStats::default();
    let mut total_calories: u32 = 0;
    let mut total_duration: u32 = 0;

    for workout in workouts {
        let Some(day) = day_key(&workout.date) else {
            continue;
        };

        let entry = daily.entry(day.to_string()).or_insert_with(|| DailyStat {
            date: day.to_string(),
            calories: 0,
            duration: 0,
            workouts: 0,
        });
        entry.calories += workout.calories_burned;
        entry.duration += workout.duration_minutes;
        entry.workouts += 1;

        match workout.details {
            WorkoutDetails::Cardio => type_stats.cardio += 1,
            WorkoutDetails::Strength { .. } => type_stats.strength += 1,
        }

        total_calories += workout.calories_burned;
        total_duration += workout.duration_minutes;
    }

    let count = workouts.len() as u32;
    Summary {
        daily_data: daily.into_values().collect(),
        type_stats,
        total_stats: TotalStats {
            total_workouts: count,
            total_calories,
            total_duration,
            average_calories: rounded_average(total_calories, count),
            average_duration: rounded_average(total_duration, count),
        },
    }
}

/// Aggregate one calendar year of workouts into twelve monthly buckets.
///
/// Months without workouts are present with zero values.
pub fn monthly_progress(workouts: &[Workout]) -> Vec<MonthlyStat> {
    let mut months: Vec<MonthlyStat> = MONTH_NAMES
        .iter()
        .map(|name| MonthlyStat {
            month: name,
            total_workouts: 0,
            total_calories: 0,
            total_duration: 0,
        })
        .collect();

    for workout in workouts {
        let Some(index) = month_index(&workout.date) else {
            continue;
        };
        let entry = &mut months[index];
        entry.total_workouts += 1;
        entry.total_calories += workout.calories_burned;
        entry.total_duration += workout.duration_minutes;
    }

    months
}

fn rounded_average(total: u32, count: u32) -> u32 {
    if count == 0 {
        0
    } else {
        (f64::from(total) / f64::from(count)).round() as u32
    }
}

/// Extract "YYYY-MM-DD" from an RFC3339 date string.
fn day_key(date: &str) -> Option<&str> {
    date.get(..10)
}

/// Extract a zero-based month index from an RFC3339 date string.
fn month_index(date: &str) -> Option<usize> {
    let month: usize = date.get(5..7)?.parse().ok()?;
    if (1..=12).contains(&month) {
        Some(month - 1)
    } else {
        None
    }
}
