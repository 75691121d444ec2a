//! Nutrition calculation module
//!
//! Pure functions for BMI, daily requirements, and RDA comparison.

pub mod bmi;
pub mod rda;
pub mod requirements;

pub use bmi::{bmi_category, calculate_bmi, BmiCategory};
pub use rda::{compare_with_rda, reference_intake, RdaReference, RDA_FEMALE, RDA_MALE};
pub use requirements::{calculate_bmr, calculate_daily_requirements};

/// Round to 2 decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
