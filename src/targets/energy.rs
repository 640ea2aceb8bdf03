//! BMR, TDEE and calorie target calculation
//!
//! BMR uses the Mifflin-St Jeor equation. TDEE scales BMR by a fixed
//! activity multiplier. The calorie target applies a fixed adjustment per
//! fitness goal. No rounding happens at any of these stages; precision is
//! carried through to the macro split.

use crate::models::{ActivityLevel, CalorieTarget, FitnessGoal, Gender};

/// Daily calorie deficit applied for a weight loss goal (kcal)
pub const WEIGHT_LOSS_DEFICIT: f64 = 500.0;

/// Daily calorie surplus applied for a muscle gain goal (kcal)
pub const MUSCLE_GAIN_SURPLUS: f64 = 300.0;

/// Basal Metabolic Rate in kcal/day (Mifflin-St Jeor)
///
/// Returns 0.0 for a gender other than male/female; that value means
/// "undefined", not a real BMR, and validated pipelines never reach it.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: i32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
        Gender::Unspecified => 0.0,
    }
}

/// Activity multiplier applied to BMR
///
/// An unrecognized level degrades to the sedentary multiplier rather than
/// failing.
fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
        ActivityLevel::Unspecified => {
            tracing::warn!("unknown activity level, falling back to sedentary multiplier");
            1.2
        }
    }
}

/// Total Daily Energy Expenditure in kcal/day
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(activity_level)
}

/// Daily calorie target for a goal, with the adjustment made explicit
///
/// Weight loss subtracts a fixed 500 kcal, muscle gain adds a fixed 300 kcal,
/// maintenance and unknown goals leave the TDEE unchanged.
pub fn calculate_calorie_target(tdee: f64, goal: FitnessGoal) -> CalorieTarget {
    let deficit_or_surplus = match goal {
        FitnessGoal::WeightLoss => -WEIGHT_LOSS_DEFICIT,
        FitnessGoal::MuscleGain => MUSCLE_GAIN_SURPLUS,
        FitnessGoal::Maintenance | FitnessGoal::Unspecified => 0.0,
    };
    CalorieTarget {
        calorie_target: tdee + deficit_or_surplus,
        deficit_or_surplus,
    }
}
