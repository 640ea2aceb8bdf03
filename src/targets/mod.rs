//! Daily target derivation pipeline
//!
//! Pure functions that turn a user's biometrics into daily calorie and
//! macronutrient targets: age -> BMR -> TDEE -> calorie target -> macro
//! split. Targets stored directly on the profile take precedence over
//! derived ones.

mod age;
mod energy;
mod macros;

pub use age::{age_on, calculate_age};
pub use energy::{
    calculate_bmr, calculate_calorie_target, calculate_tdee, MUSCLE_GAIN_SURPLUS,
    WEIGHT_LOSS_DEFICIT,
};
pub use macros::calculate_macronutrients;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Biometrics, DailyTargets, TargetBreakdown, UserProfile};

/// Why targets could not be computed from a profile
///
/// Every variant means "insufficient data": the pipeline refuses to produce
/// a number that could be mistaken for a real target.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TargetsError {
    #[error("profile field `{0}` is missing")]
    MissingField(&'static str),

    #[error("profile field `{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("birth date `{0}` is not a YYYY-MM-DD date")]
    InvalidBirthDate(String),

    #[error("age {0} is out of range, birth date must be in the past")]
    AgeOutOfRange(i32),

    #[error("BMR estimation requires a male or female gender")]
    UnsupportedGender,
}

/// Result type for target derivation
pub type TargetsResult<T> = Result<T, TargetsError>;

/// Derive the full target breakdown from validated biometrics
pub fn derive_targets(bio: &Biometrics) -> TargetBreakdown {
    let bmr = calculate_bmr(bio.weight_kg, bio.height_cm, bio.age, bio.gender);
    let tdee = calculate_tdee(bmr, bio.activity_level);
    let calorie_target = calculate_calorie_target(tdee, bio.fitness_goal);
    let macros = calculate_macronutrients(calorie_target.calorie_target, bio.fitness_goal, None);
    TargetBreakdown {
        age: bio.age,
        bmr,
        tdee,
        calorie_target,
        macros,
    }
}

/// Resolve the daily targets for a profile
///
/// A complete set of stored targets wins over derivation; otherwise the
/// profile is validated and the targets are derived from its biometrics.
/// `today` anchors the age calculation.
pub fn resolve_daily_targets(
    profile: &UserProfile,
    today: NaiveDate,
) -> TargetsResult<DailyTargets> {
    if let Some(stored) = profile.stored_targets() {
        return Ok(stored);
    }
    let bio = profile.biometrics(today)?;
    Ok(derive_targets(&bio).daily_targets())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, FitnessGoal, Gender};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn reference_profile() -> UserProfile {
        UserProfile {
            birth_date: Some("1995-06-15".to_string()),
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            fitness_goal: FitnessGoal::Maintenance,
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_reference_derivation() {
        let bio = reference_profile().biometrics(today()).unwrap();
        let breakdown = derive_targets(&bio);
        assert_eq!(breakdown.age, 30);
        assert!((breakdown.bmr - 1693.75).abs() < 1e-9);
        assert!((breakdown.tdee - 2625.3125).abs() < 1e-9);
        assert!((breakdown.calorie_target.calorie_target - 2625.3125).abs() < 1e-9);
        assert_eq!(breakdown.calorie_target.deficit_or_surplus, 0.0);
        assert_eq!(breakdown.macros.protein_grams, 164.0);
        assert_eq!(breakdown.macros.carb_grams, 361.0);
        assert_eq!(breakdown.macros.fat_grams, 58.0);
    }

    #[test]
    fn test_resolve_prefers_stored_targets() {
        let mut profile = reference_profile();
        profile.target_calories = Some(2000.0);
        profile.target_protein_grams = Some(150.0);
        profile.target_carb_grams = Some(200.0);
        profile.target_fat_grams = Some(67.0);

        let targets = resolve_daily_targets(&profile, today()).unwrap();
        assert!((targets.calories - 2000.0).abs() < 1e-9);
        assert!((targets.protein_grams - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_derives_when_no_stored_targets() {
        let targets = resolve_daily_targets(&reference_profile(), today()).unwrap();
        assert!((targets.calories - 2625.3125).abs() < 1e-9);
        assert!((targets.protein_grams - 164.0).abs() < 1e-9);
        assert!((targets.carb_grams - 361.0).abs() < 1e-9);
        assert!((targets.fat_grams - 58.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_fails_on_incomplete_profile() {
        let mut profile = reference_profile();
        profile.weight_kg = None;
        assert_eq!(
            resolve_daily_targets(&profile, today()),
            Err(TargetsError::MissingField("weight_kg"))
        );
    }

    #[test]
    fn test_partial_stored_targets_fall_back_to_derivation() {
        let mut profile = reference_profile();
        profile.target_calories = Some(1800.0); // other three missing
        let targets = resolve_daily_targets(&profile, today()).unwrap();
        assert!((targets.calories - 2625.3125).abs() < 1e-9);
    }

    #[test]
    fn test_weight_loss_pipeline_applies_deficit() {
        let mut profile = reference_profile();
        profile.fitness_goal = FitnessGoal::WeightLoss;
        let bio = profile.biometrics(today()).unwrap();
        let breakdown = derive_targets(&bio);
        assert!((breakdown.calorie_target.calorie_target - (2625.3125 - 500.0)).abs() < 1e-9);
        assert!((breakdown.calorie_target.deficit_or_surplus + 500.0).abs() < 1e-9);
        // weight loss split: 30/40/30
        assert!((breakdown.macros.protein_percentage - 30.0).abs() < 1e-9);
        assert!((breakdown.macros.carb_percentage - 40.0).abs() < 1e-9);
        assert!((breakdown.macros.fat_percentage - 30.0).abs() < 1e-9);
    }
}
