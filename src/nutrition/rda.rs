//! RDA comparison
//!
//! Scores consumed totals against personal targets or the static adult
//! reference intakes, producing per-nutrient statuses and suggestions.

use serde::Serialize;

use crate::models::{
    DailyRequirements, Gender, IncreaseSuggestion, NutrientAnalysis, NutrientStatus,
    NutrientTotals, OverallStatus, RdaAnalysis, ReduceSuggestion, Suggestions, TrackedNutrient,
};

use super::round2;

/// Intake below this percentage of target is low
pub const LOW_THRESHOLD_PCT: f64 = 80.0;
/// Intake above this percentage of target is high
pub const HIGH_THRESHOLD_PCT: f64 = 120.0;

/// Adult reference daily intakes for one gender row
///
/// Macros and fiber in grams, calcium/iron/vitamin_c in milligrams,
/// vitamin_a in micrograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RdaReference {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub calcium: f64,
    pub iron: f64,
    pub vitamin_c: f64,
    pub vitamin_a: f64,
}

/// Reference intakes for adult males
pub const RDA_MALE: RdaReference = RdaReference {
    calories: 2500.0,
    protein: 56.0,
    carbs: 300.0,
    fat: 78.0,
    fiber: 38.0,
    calcium: 1000.0,
    iron: 8.0,
    vitamin_c: 90.0,
    vitamin_a: 900.0,
};

/// Reference intakes for adult females
pub const RDA_FEMALE: RdaReference = RdaReference {
    calories: 2000.0,
    protein: 46.0,
    carbs: 250.0,
    fat: 65.0,
    fiber: 25.0,
    calcium: 1000.0,
    iron: 18.0,
    vitamin_c: 75.0,
    vitamin_a: 700.0,
};

/// Reference row for a gender; Other resolves to the male row
pub fn reference_intake(gender: Gender) -> &'static RdaReference {
    match gender {
        Gender::Female => &RDA_FEMALE,
        Gender::Male | Gender::Other => &RDA_MALE,
    }
}

/// Score one nutrient's intake against its target
///
/// A non-positive target yields percentage 0 rather than a division
/// error.
fn analyze_nutrient(consumed: f64, target: f64) -> NutrientAnalysis {
    let percentage = if target > 0.0 {
        consumed / target * 100.0
    } else {
        0.0
    };

    let status = if percentage < LOW_THRESHOLD_PCT {
        NutrientStatus::Low
    } else if percentage > HIGH_THRESHOLD_PCT {
        NutrientStatus::High
    } else {
        NutrientStatus::Balanced
    };

    NutrientAnalysis {
        consumed: round2(consumed),
        target: round2(target),
        percentage: round2(percentage),
        status,
        difference: round2(consumed - target),
    }
}

fn build_suggestions(records: &[(TrackedNutrient, &NutrientAnalysis)]) -> Suggestions {
    let mut suggestions = Suggestions::default();

    for (nutrient, record) in records {
        match record.status {
            NutrientStatus::Low => suggestions.increase.push(IncreaseSuggestion {
                nutrient: *nutrient,
                current: record.consumed,
                target: record.target,
                needed: round2(record.target - record.consumed),
            }),
            NutrientStatus::High => suggestions.reduce.push(ReduceSuggestion {
                nutrient: *nutrient,
                current: record.consumed,
                target: record.target,
                excess: round2(record.consumed - record.target),
            }),
            NutrientStatus::Balanced => {}
        }
    }

    suggestions
}

/// Compare consumed totals against daily targets
///
/// Uses the personal requirements block when present, otherwise the
/// static reference intakes for the given gender. Pure and total for
/// any numeric input; negative consumed values are accepted as-is.
pub fn compare_with_rda(
    consumed: &NutrientTotals,
    gender: Gender,
    requirements: Option<&DailyRequirements>,
) -> RdaAnalysis {
    let (target_calories, target_protein, target_carbs, target_fat) = match requirements {
        Some(req) => (
            req.calories as f64,
            req.protein as f64,
            req.carbs as f64,
            req.fat as f64,
        ),
        None => {
            tracing::debug!(
                "No personal requirements; using {} reference intakes.",
                gender.as_str()
            );
            let reference = reference_intake(gender);
            (
                reference.calories,
                reference.protein,
                reference.carbs,
                reference.fat,
            )
        }
    };

    let calories = analyze_nutrient(consumed.calories, target_calories);
    let protein = analyze_nutrient(consumed.protein, target_protein);
    let carbs = analyze_nutrient(consumed.carbs, target_carbs);
    let fat = analyze_nutrient(consumed.fat, target_fat);

    let all_balanced = [&calories, &protein, &carbs, &fat]
        .iter()
        .all(|record| record.status == NutrientStatus::Balanced);
    let overall_status = if all_balanced {
        OverallStatus::Balanced
    } else {
        OverallStatus::NotBalanced
    };

    let suggestions = build_suggestions(&[
        (TrackedNutrient::Calories, &calories),
        (TrackedNutrient::Protein, &protein),
        (TrackedNutrient::Carbs, &carbs),
        (TrackedNutrient::Fat, &fat),
    ]);

    RdaAnalysis {
        calories,
        protein,
        carbs,
        fat,
        overall_status,
        suggestions,
    }
}
