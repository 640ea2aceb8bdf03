//! User profile and validated biometrics
//!
//! The stored profile is a loose record with optional fields. Target
//! derivation never runs on it directly; it runs on a `Biometrics` value
//! produced by an explicit validation step, so an incomplete profile yields
//! an error instead of a fabricated zero target.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::targets::{age_on, TargetsError, TargetsResult};

use super::DailyTargets;

/// Gender as stored on the profile
///
/// BMR estimation is only defined for male/female; any other stored value
/// maps to `Unspecified` and fails biometrics validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unspecified => "unspecified",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Unspecified,
        }
    }
}

/// Self-reported activity level
///
/// Unknown stored values map to `Unspecified`, which the TDEE calculation
/// treats as sedentary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::Unspecified => "unspecified",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Unspecified,
        }
    }
}

/// What the user is working toward
///
/// Unknown stored values map to `Unspecified`, which every policy treats as
/// maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    Maintenance,
    MuscleGain,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl FitnessGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "weight_loss",
            FitnessGoal::Maintenance => "maintenance",
            FitnessGoal::MuscleGain => "muscle_gain",
            FitnessGoal::Unspecified => "unspecified",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "weight_loss" => FitnessGoal::WeightLoss,
            "maintenance" => FitnessGoal::Maintenance,
            "muscle_gain" => FitnessGoal::MuscleGain,
            _ => FitnessGoal::Unspecified,
        }
    }
}

/// Stored user profile record
///
/// Every field is optional because the profile is filled in over time. The
/// four `target_*` fields, when all present, override derivation entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub birth_date: Option<String>, // "YYYY-MM-DD"
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub fitness_goal: FitnessGoal,
    pub target_calories: Option<f64>,
    pub target_protein_grams: Option<f64>,
    pub target_carb_grams: Option<f64>,
    pub target_fat_grams: Option<f64>,
}

impl UserProfile {
    /// Stored daily targets, if the profile carries a complete set
    pub fn stored_targets(&self) -> Option<DailyTargets> {
        match (
            self.target_calories,
            self.target_protein_grams,
            self.target_carb_grams,
            self.target_fat_grams,
        ) {
            (Some(calories), Some(protein_grams), Some(carb_grams), Some(fat_grams)) => {
                Some(DailyTargets {
                    calories,
                    protein_grams,
                    carb_grams,
                    fat_grams,
                })
            }
            _ => None,
        }
    }

    /// Validate the profile into biometrics usable for target derivation
    ///
    /// `today` is the calendar date the age is computed against.
    pub fn biometrics(&self, today: NaiveDate) -> TargetsResult<Biometrics> {
        let birth_str = self
            .birth_date
            .as_deref()
            .ok_or(TargetsError::MissingField("birth_date"))?;
        let birth = NaiveDate::parse_from_str(birth_str, "%Y-%m-%d")
            .map_err(|_| TargetsError::InvalidBirthDate(birth_str.to_string()))?;

        let age = age_on(birth, today);
        if age <= 0 {
            return Err(TargetsError::AgeOutOfRange(age));
        }

        let weight_kg = positive(self.weight_kg, "weight_kg")?;
        let height_cm = positive(self.height_cm, "height_cm")?;

        if self.gender == Gender::Unspecified {
            return Err(TargetsError::UnsupportedGender);
        }

        Ok(Biometrics {
            age,
            weight_kg,
            height_cm,
            gender: self.gender,
            activity_level: self.activity_level,
            fitness_goal: self.fitness_goal,
        })
    }
}

/// Validated inputs for the target derivation pipeline
///
/// Only constructed by `UserProfile::biometrics`, so age, weight and height
/// are always positive and the gender supports BMR estimation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Biometrics {
    pub age: i32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub fitness_goal: FitnessGoal,
}

fn positive(value: Option<f64>, field: &'static str) -> TargetsResult<f64> {
    let v = value.ok_or(TargetsError::MissingField(field))?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(TargetsError::NonPositive { field, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_profile() -> UserProfile {
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

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_complete_profile_validates() {
        let bio = complete_profile().biometrics(today()).unwrap();
        assert_eq!(bio.age, 30);
        assert!((bio.weight_kg - 70.0).abs() < 1e-9);
        assert_eq!(bio.gender, Gender::Male);
    }

    #[test]
    fn test_missing_birth_date() {
        let mut profile = complete_profile();
        profile.birth_date = None;
        assert_eq!(
            profile.biometrics(today()),
            Err(TargetsError::MissingField("birth_date"))
        );
    }

    #[test]
    fn test_malformed_birth_date() {
        let mut profile = complete_profile();
        profile.birth_date = Some("June 15, 1995".to_string());
        assert!(matches!(
            profile.biometrics(today()),
            Err(TargetsError::InvalidBirthDate(_))
        ));
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let mut profile = complete_profile();
        profile.birth_date = Some("2030-01-01".to_string());
        assert!(matches!(
            profile.biometrics(today()),
            Err(TargetsError::AgeOutOfRange(_))
        ));
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        let mut profile = complete_profile();
        profile.weight_kg = Some(0.0);
        assert_eq!(
            profile.biometrics(today()),
            Err(TargetsError::NonPositive {
                field: "weight_kg",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_missing_height_rejected() {
        let mut profile = complete_profile();
        profile.height_cm = None;
        assert_eq!(
            profile.biometrics(today()),
            Err(TargetsError::MissingField("height_cm"))
        );
    }

    #[test]
    fn test_unspecified_gender_rejected() {
        let mut profile = complete_profile();
        profile.gender = Gender::Unspecified;
        assert_eq!(
            profile.biometrics(today()),
            Err(TargetsError::UnsupportedGender)
        );
    }

    #[test]
    fn test_stored_targets_require_all_four_fields() {
        let mut profile = complete_profile();
        profile.target_calories = Some(2200.0);
        profile.target_protein_grams = Some(150.0);
        assert!(profile.stored_targets().is_none());

        profile.target_carb_grams = Some(250.0);
        profile.target_fat_grams = Some(70.0);
        let stored = profile.stored_targets().unwrap();
        assert!((stored.calories - 2200.0).abs() < 1e-9);
        assert!((stored.fat_grams - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_enum_values_deserialize_to_unspecified() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"gender":"nonbinary","activity_level":"extreme","fitness_goal":"recomp"}"#,
        )
        .unwrap();
        assert_eq!(profile.gender, Gender::Unspecified);
        assert_eq!(profile.activity_level, ActivityLevel::Unspecified);
        assert_eq!(profile.fitness_goal, FitnessGoal::Unspecified);
    }
}
