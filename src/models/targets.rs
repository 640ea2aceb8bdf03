//! Target output types
//!
//! Results of the calorie/macro derivation pipeline.

use serde::{Deserialize, Serialize};

/// Daily nutritional targets
///
/// Either stored directly on the profile or derived from biometrics; stored
/// values take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    pub calories: f64,
    pub protein_grams: f64,
    pub carb_grams: f64,
    pub fat_grams: f64,
}

/// Calorie target with the goal adjustment made explicit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieTarget {
    pub calorie_target: f64,
    /// Signed adjustment applied to the TDEE (-500 deficit, +300 surplus, 0)
    pub deficit_or_surplus: f64,
}

/// Fractions of the calorie target assigned to each macro; must sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Macronutrient targets in grams with their calorie-share percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_grams: f64,
    pub carb_grams: f64,
    pub fat_grams: f64,
    pub protein_percentage: f64,
    pub carb_percentage: f64,
    pub fat_percentage: f64,
}

/// Full derivation trace from biometrics to macro targets
#[derive(Debug, Clone, Serialize)]
pub struct TargetBreakdown {
    pub age: i32,
    pub bmr: f64,
    pub tdee: f64,
    pub calorie_target: CalorieTarget,
    pub macros: MacroTargets,
}

impl TargetBreakdown {
    /// Collapse the breakdown into the daily targets the tracker stores
    pub fn daily_targets(&self) -> DailyTargets {
        DailyTargets {
            calories: self.calorie_target.calorie_target,
            protein_grams: self.macros.protein_grams,
            carb_grams: self.macros.carb_grams,
            fat_grams: self.macros.fat_grams,
        }
    }
}
