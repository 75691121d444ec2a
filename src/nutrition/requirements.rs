//! Daily requirement calculation
//!
//! BMR via Mifflin-St Jeor and goal-adjusted calorie/macro targets.

use crate::models::{ActivityLevel, DailyRequirements, Gender};

// ============================================================================
// Energy Constants
// ============================================================================

/// Calories per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Calories per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Calories per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Share of daily calories allotted to carbohydrates
pub const CARB_CALORIE_SHARE: f64 = 0.45;
/// Share of daily calories allotted to fat
pub const FAT_CALORIE_SHARE: f64 = 0.30;

// ============================================================================
// Goal Adjustment Constants
// ============================================================================

/// Calorie surplus for bulking goals
pub const BULK_SURPLUS_KCAL: i64 = 500;
/// Calorie deficit for cutting goals
pub const CUT_DEFICIT_KCAL: i64 = 500;
/// Safety floor for daily calories, applied after goal adjustment
pub const MIN_DAILY_CALORIES: i64 = 1200;

/// Protein target in g/kg when the goal mentions bulk or cut
pub const PROTEIN_FACTOR_MUSCLE: f64 = 2.0;
/// Protein target in g/kg otherwise
pub const PROTEIN_FACTOR_STANDARD: f64 = 1.6;

/// Direction of the calorie adjustment scanned from the goal text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GoalAdjustment {
    Surplus,
    Deficit,
    Maintain,
}

/// Scan a lower-cased goal string; surplus keywords win over deficit ones
fn goal_adjustment(goal: &str) -> GoalAdjustment {
    if goal.contains("bulk") || goal.contains("gain") {
        GoalAdjustment::Surplus
    } else if goal.contains("cut") || goal.contains("lose") || goal.contains("lean") {
        GoalAdjustment::Deficit
    } else {
        GoalAdjustment::Maintain
    }
}

/// Basal metabolic rate via the Mifflin-St Jeor equation
///
/// Only Male selects the male formula; any other gender takes the
/// non-male branch.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match gender {
        Gender::Male => base + 5.0,
        _ => base - 161.0,
    }
}

/// Calculate goal-adjusted daily calorie and macro targets
///
/// Calories are BMR scaled by the activity multiplier, adjusted +/-500
/// kcal for bulk/cut goals, and never below the 1200 kcal floor. Macro
/// gram targets are truncated to integers; their calorie contributions
/// are not constrained to sum to the calorie target.
pub fn calculate_daily_requirements(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    activity_level: ActivityLevel,
    fitness_goal: &str,
) -> DailyRequirements {
    let bmr = calculate_bmr(weight_kg, height_cm, age, gender);
    let mut calories = (bmr * activity_level.multiplier()) as i64;

    let goal = fitness_goal.to_lowercase();
    match goal_adjustment(&goal) {
        GoalAdjustment::Surplus => calories += BULK_SURPLUS_KCAL,
        GoalAdjustment::Deficit => calories -= CUT_DEFICIT_KCAL,
        GoalAdjustment::Maintain => {}
    }
    if calories < MIN_DAILY_CALORIES {
        calories = MIN_DAILY_CALORIES;
    }

    // Higher protein for bulk/cut to preserve muscle
    let protein_factor = if goal.contains("bulk") || goal.contains("cut") {
        PROTEIN_FACTOR_MUSCLE
    } else {
        PROTEIN_FACTOR_STANDARD
    };
    let protein = (weight_kg * protein_factor) as i64;

    let carbs = (calories as f64 * CARB_CALORIE_SHARE / KCAL_PER_G_CARBS) as i64;
    let fat = (calories as f64 * FAT_CALORIE_SHARE / KCAL_PER_G_FAT) as i64;

    DailyRequirements {
        calories,
        protein,
        carbs,
        fat,
    }
}
