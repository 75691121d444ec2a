//! Body Mass Index
//!
//! BMI calculation and weight-category screening.

use serde::{Deserialize, Serialize};

use super::round2;

/// BMI weight category
///
/// Serialized capitalized ("Underweight", "Normal", ...) as callers
/// display these labels verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Calculate BMI from weight (kg) and height (cm), rounded to 2 decimals
///
/// Zero height is a defined degenerate case and returns 0 rather than
/// dividing by zero.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    if height_m == 0.0 {
        return 0.0;
    }
    round2(weight_kg / (height_m * height_m))
}

/// Classify a BMI value
///
/// Half-open intervals with inclusive lower bounds: < 18.5 underweight,
/// 18.5-25 normal, 25-30 overweight, >= 30 obese.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}
