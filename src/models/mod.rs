//! Data models
//!
//! Typed records for profiles, logged entries and derived targets.

mod entry;
mod nutrition;
mod profile;
mod targets;

pub use entry::{ExerciseEntry, FoodEntry, MealType};
pub use nutrition::NutrientTotals;
pub use profile::{ActivityLevel, Biometrics, FitnessGoal, Gender, UserProfile};
pub use targets::{CalorieTarget, DailyTargets, MacroRatios, MacroTargets, TargetBreakdown};
