//! Daily consumption aggregation and progress
//!
//! Sums logged food and exercise entries for one calendar day and computes
//! bounded progress percentages against targets. Pure and stateless; the
//! caller loads the entries and stores nothing here.

use serde::Serialize;

use crate::models::{ExerciseEntry, FoodEntry, NutrientTotals};

/// Aggregated intake and exercise for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DaySummary {
    pub consumed: NutrientTotals,
    pub exercise_calories_burned: f64,
    /// Consumed calories minus exercise calories burned
    pub net_calories: f64,
}

/// Sum entries already filtered to a single day
pub fn summarize_day(food_entries: &[FoodEntry], exercise_entries: &[ExerciseEntry]) -> DaySummary {
    let consumed: NutrientTotals = food_entries.iter().map(FoodEntry::totals).sum();
    let burned: f64 = exercise_entries.iter().map(ExerciseEntry::burned).sum();
    DaySummary {
        net_calories: consumed.calories - burned,
        consumed,
        exercise_calories_burned: burned,
    }
}

/// Sum only the entries logged on `date`
///
/// Matching is an exact day-string comparison ("YYYY-MM-DD"), not a range.
pub fn summarize_date(
    date: &str,
    food_entries: &[FoodEntry],
    exercise_entries: &[ExerciseEntry],
) -> DaySummary {
    let consumed: NutrientTotals = food_entries
        .iter()
        .filter(|e| e.date == date)
        .map(FoodEntry::totals)
        .sum();
    let burned: f64 = exercise_entries
        .iter()
        .filter(|e| e.date == date)
        .map(ExerciseEntry::burned)
        .sum();
    DaySummary {
        net_calories: consumed.calories - burned,
        consumed,
        exercise_calories_burned: burned,
    }
}

/// Bounded progress toward a target, in percent
///
/// A non-positive target reports 0 instead of dividing by zero. Overage is
/// clamped to 100; this is a display metric, use `remaining` for the
/// unclamped difference.
pub fn progress_percent(consumed: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    ((consumed / target) * 100.0).clamp(0.0, 100.0)
}

/// Unclamped distance to the target; negative once the target is exceeded
pub fn remaining(target: f64, consumed: f64) -> f64 {
    target - consumed
}
