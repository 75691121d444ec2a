//! Consumed-nutrient totals
//!
//! Shared across per-food records, meal aggregation, and RDA analysis.

use serde::{Deserialize, Serialize};

use crate::nutrition::requirements::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::nutrition::round2;

/// Nutrient totals for a food, meal, or day
///
/// Values are non-negative by convention but not validated; macros and
/// fiber/sugar in grams, sodium/calcium/iron/vitamin_c in milligrams,
/// vitamin_a in micrograms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub calcium: f64,
    pub iron: f64,
    pub vitamin_a: f64,
    pub vitamin_c: f64,
}

/// Calorie contribution of each macronutrient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroCalories {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
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
            fiber: self.fiber * multiplier,
            sugar: self.sugar * multiplier,
            sodium: self.sodium * multiplier,
            calcium: self.calcium * multiplier,
            iron: self.iron * multiplier,
            vitamin_a: self.vitamin_a * multiplier,
            vitamin_c: self.vitamin_c * multiplier,
        }
    }

    /// Add another set of totals to this one
    pub fn add(&self, other: &NutrientTotals) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            sugar: self.sugar + other.sugar,
            sodium: self.sodium + other.sodium,
            calcium: self.calcium + other.calcium,
            iron: self.iron + other.iron,
            vitamin_a: self.vitamin_a + other.vitamin_a,
            vitamin_c: self.vitamin_c + other.vitamin_c,
        }
    }

    /// Totals for a portion, from per-100g values and a gram quantity
    pub fn from_per_100g(base: &NutrientTotals, grams: f64) -> Self {
        base.scale(grams / 100.0)
    }

    /// Copy with every field rounded to 2 decimal places
    pub fn rounded(&self) -> Self {
        Self {
            calories: round2(self.calories),
            protein: round2(self.protein),
            carbs: round2(self.carbs),
            fat: round2(self.fat),
            fiber: round2(self.fiber),
            sugar: round2(self.sugar),
            sodium: round2(self.sodium),
            calcium: round2(self.calcium),
            iron: round2(self.iron),
            vitamin_a: round2(self.vitamin_a),
            vitamin_c: round2(self.vitamin_c),
        }
    }

    /// Calories contributed by each macronutrient (4/4/9 kcal per gram)
    pub fn macro_calories(&self) -> MacroCalories {
        MacroCalories {
            protein: self.protein * KCAL_PER_G_PROTEIN,
            carbs: self.carbs * KCAL_PER_G_CARBS,
            fat: self.fat * KCAL_PER_G_FAT,
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
