//! RDA analysis records
//!
//! Output structures of the intake-vs-target comparison.

use serde::{Deserialize, Serialize};

/// The nutrients scored against daily targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackedNutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
}

/// Intake status of a single nutrient relative to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientStatus {
    Low,
    Balanced,
    High,
}

/// Overall intake status across all tracked nutrients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Balanced,
    NotBalanced,
}

/// Analysis of one nutrient's intake against its target
///
/// All quantities are rounded to 2 decimal places on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientAnalysis {
    pub consumed: f64,
    pub target: f64,
    pub percentage: f64,
    pub status: NutrientStatus,
    pub difference: f64,
}

/// A nutrient the caller should consume more of
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncreaseSuggestion {
    pub nutrient: TrackedNutrient,
    pub current: f64,
    pub target: f64,
    pub needed: f64,
}

/// A nutrient the caller should cut back on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReduceSuggestion {
    pub nutrient: TrackedNutrient,
    pub current: f64,
    pub target: f64,
    pub excess: f64,
}

/// Suggested intake corrections derived from the per-nutrient statuses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    pub increase: Vec<IncreaseSuggestion>,
    pub reduce: Vec<ReduceSuggestion>,
}

/// Full intake analysis for one set of consumed totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RdaAnalysis {
    pub calories: NutrientAnalysis,
    pub protein: NutrientAnalysis,
    pub carbs: NutrientAnalysis,
    pub fat: NutrientAnalysis,
    pub overall_status: OverallStatus,
    pub suggestions: Suggestions,
}
