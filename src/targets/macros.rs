//! Macronutrient split for a calorie target
//!
//! Splits the calorie target across protein, carbs and fat by goal-specific
//! ratios, then converts calorie shares to grams with the standard Atwater
//! factors. Only the final gram values are rounded.

use crate::models::{FitnessGoal, MacroRatios, MacroTargets};

/// Calories per gram of protein or carbohydrate (Atwater)
const KCAL_PER_GRAM_PROTEIN_CARB: f64 = 4.0;

/// Calories per gram of fat (Atwater)
const KCAL_PER_GRAM_FAT: f64 = 9.0;

const WEIGHT_LOSS_RATIOS: MacroRatios = MacroRatios {
    protein: 0.30,
    carbs: 0.40,
    fat: 0.30,
};

const MUSCLE_GAIN_RATIOS: MacroRatios = MacroRatios {
    protein: 0.30,
    carbs: 0.50,
    fat: 0.20,
};

const MAINTENANCE_RATIOS: MacroRatios = MacroRatios {
    protein: 0.25,
    carbs: 0.55,
    fat: 0.20,
};

/// Default calorie split for a goal; each set sums to 1.0
///
/// An unknown goal degrades to the maintenance split rather than failing.
fn ratios_for_goal(goal: FitnessGoal) -> MacroRatios {
    match goal {
        FitnessGoal::WeightLoss => WEIGHT_LOSS_RATIOS,
        FitnessGoal::MuscleGain => MUSCLE_GAIN_RATIOS,
        FitnessGoal::Maintenance => MAINTENANCE_RATIOS,
        FitnessGoal::Unspecified => {
            tracing::warn!("unknown fitness goal, falling back to maintenance macro split");
            MAINTENANCE_RATIOS
        }
    }
}

/// Macronutrient targets in grams for a calorie target
///
/// `custom_ratios` overrides the goal's default split; fractions are expected
/// to sum to 1.0. Gram values are rounded to the nearest gram, percentages
/// are the raw ratio x 100.
pub fn calculate_macronutrients(
    calorie_target: f64,
    goal: FitnessGoal,
    custom_ratios: Option<MacroRatios>,
) -> MacroTargets {
    let ratios = custom_ratios.unwrap_or_else(|| ratios_for_goal(goal));

    let protein_grams = (calorie_target * ratios.protein / KCAL_PER_GRAM_PROTEIN_CARB).round();
    let carb_grams = (calorie_target * ratios.carbs / KCAL_PER_GRAM_PROTEIN_CARB).round();
    let fat_grams = (calorie_target * ratios.fat / KCAL_PER_GRAM_FAT).round();

    MacroTargets {
        protein_grams,
        carb_grams,
        fat_grams,
        protein_percentage: ratios.protein * 100.0,
        carb_percentage: ratios.carbs * 100.0,
        fat_percentage: ratios.fat * 100.0,
    }
}
