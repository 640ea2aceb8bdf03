//! Logged food and exercise entries
//!
//! One row per food item or exercise session, keyed by a local calendar day
//! string ("YYYY-MM-DD"). Write and read paths must use the same day format;
//! lookups are exact string matches, not ranges.

use serde::{Deserialize, Serialize};

use super::NutrientTotals;

/// Meal slot for a food entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    #[default]
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" => Some(MealType::Snack),
            _ => None,
        }
    }
}

/// One logged food item
///
/// Numeric fields are optional: an absent or non-finite value contributes
/// zero during aggregation instead of poisoning the sums.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodEntry {
    pub date: String, // "YYYY-MM-DD"
    #[serde(default)]
    pub meal_type: MealType,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein_grams: Option<f64>,
    #[serde(default)]
    pub carb_grams: Option<f64>,
    #[serde(default)]
    pub fat_grams: Option<f64>,
}

impl FoodEntry {
    /// Nutrient contribution of this entry
    pub fn totals(&self) -> NutrientTotals {
        NutrientTotals {
            calories: or_zero(self.calories),
            protein: or_zero(self.protein_grams),
            carbs: or_zero(self.carb_grams),
            fat: or_zero(self.fat_grams),
        }
    }
}

/// One logged exercise session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub date: String, // "YYYY-MM-DD"
    #[serde(default)]
    pub calories_burned: Option<f64>,
    #[serde(default)]
    pub duration_minutes: Option<f64>,
}

impl ExerciseEntry {
    /// Calories burned by this session
    pub fn burned(&self) -> f64 {
        or_zero(self.calories_burned)
    }
}

/// Missing or non-finite values count as zero contribution
fn or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}
