//! Shared nutrient totals structure
//!
//! Used for food entry contributions and daily consumption sums.

use serde::{Deserialize, Serialize};

/// Calories and macronutrients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl NutrientTotals {
    /// Create a new NutrientTotals with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale all values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    /// Add another total to this one
    pub fn add(&self, other: &NutrientTotals) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl std::ops::Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, other: NutrientTotals) -> NutrientTotals {
        NutrientTotals::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for NutrientTotals {
    type Output = NutrientTotals;

    fn mul(self, multiplier: f64) -> NutrientTotals {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientTotals::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_totals() {
        let a = NutrientTotals {
            calories: 500.0,
            protein: 30.0,
            carbs: 50.0,
            fat: 10.0,
        };
        let b = NutrientTotals {
            calories: 250.0,
            protein: 10.0,
            carbs: 20.0,
            fat: 12.0,
        };
        let total: NutrientTotals = vec![a, b].into_iter().sum();
        assert!((total.calories - 750.0).abs() < 1e-9);
        assert!((total.protein - 40.0).abs() < 1e-9);
        assert!((total.carbs - 70.0).abs() < 1e-9);
        assert!((total.fat - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale() {
        let half = NutrientTotals {
            calories: 100.0,
            protein: 8.0,
            carbs: 12.0,
            fat: 4.0,
        }
        .scale(0.5);
        assert!((half.calories - 50.0).abs() < 1e-9);
        assert!((half.fat - 2.0).abs() < 1e-9);
    }
}
