//! User profile model
//!
//! Biometric inputs and the profile record with its derived
//! BMI/requirements block.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::nutrition::bmi::{bmi_category, calculate_bmi, BmiCategory};
use crate::nutrition::rda::compare_with_rda;
use crate::nutrition::requirements::calculate_daily_requirements;
use super::analysis::RdaAnalysis;
use super::nutrition::NutrientTotals;

/// Profile validation error types
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("weight must be positive, got {0} kg")]
    InvalidWeight(f64),

    #[error("height must be positive, got {0} cm")]
    InvalidHeight(f64),
}

/// Biological gender used for BMR and reference-intake selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Parse case-insensitively; anything unrecognized maps to Other
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

/// Physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Parse case-insensitively; unrecognized values fall back to moderate
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            other => {
                if !other.is_empty() {
                    tracing::warn!(
                        "Activity level fallback: '{}' not recognized, using moderate.",
                        s
                    );
                }
                ActivityLevel::Moderate
            }
        }
    }

    /// Multiplier applied to BMR to estimate daily expenditure
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

fn lenient_gender<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Gender, D::Error> {
    let s = String::deserialize(deserializer)?;
    Ok(Gender::from_str(&s))
}

fn lenient_activity<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<ActivityLevel, D::Error> {
    let s = String::deserialize(deserializer)?;
    Ok(ActivityLevel::from_str(&s))
}

fn default_goal() -> String {
    "maintain".to_string()
}

/// Biometric data for computing a profile's derived values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    #[serde(deserialize_with = "lenient_gender")]
    pub gender: Gender,
    #[serde(default, deserialize_with = "lenient_activity")]
    pub activity_level: ActivityLevel,
    #[serde(default = "default_goal")]
    pub fitness_goal: String,
}

impl BiometricInput {
    /// Reject out-of-range biometrics before any computation runs
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.weight_kg <= 0.0 {
            return Err(ProfileError::InvalidWeight(self.weight_kg));
        }
        if self.height_cm <= 0.0 {
            return Err(ProfileError::InvalidHeight(self.height_cm));
        }
        Ok(())
    }
}

/// Daily calorie and macro targets derived from a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRequirements {
    pub calories: i64,
    pub protein: i64, // grams
    pub carbs: i64,   // grams
    pub fat: i64,     // grams
}

/// Data for partially updating a profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BiometricUpdate {
    pub name: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub fitness_goal: Option<String>,
    pub health_issues: Option<Vec<String>>,
    pub allergies: Option<Vec<String>>,
}

impl BiometricUpdate {
    /// Whether this update touches any input of the derived block
    fn changes_requirements(&self) -> bool {
        self.weight_kg.is_some()
            || self.height_cm.is_some()
            || self.age.is_some()
            || self.gender.is_some()
            || self.activity_level.is_some()
            || self.fitness_goal.is_some()
    }
}

/// A user profile with biometrics and derived nutrition targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub fitness_goal: String,
    pub health_issues: Vec<String>,
    pub allergies: Vec<String>,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub daily_requirements: DailyRequirements,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile from validated biometrics, computing the derived block
    pub fn new(name: &str, input: &BiometricInput) -> Result<Self, ProfileError> {
        input.validate()?;

        let now = Utc::now();
        let mut profile = Self {
            name: name.to_string(),
            age: input.age,
            gender: input.gender,
            weight_kg: input.weight_kg,
            height_cm: input.height_cm,
            activity_level: input.activity_level,
            fitness_goal: input.fitness_goal.clone(),
            health_issues: Vec::new(),
            allergies: Vec::new(),
            bmi: 0.0,
            bmi_category: BmiCategory::Underweight,
            daily_requirements: DailyRequirements {
                calories: 0,
                protein: 0,
                carbs: 0,
                fat: 0,
            },
            created_at: now,
            updated_at: now,
        };
        profile.recompute_derived();

        Ok(profile)
    }

    /// Recompute BMI, category, and daily requirements from current biometrics
    fn recompute_derived(&mut self) {
        self.bmi = calculate_bmi(self.weight_kg, self.height_cm);
        self.bmi_category = bmi_category(self.bmi);
        self.daily_requirements = calculate_daily_requirements(
            self.weight_kg,
            self.height_cm,
            self.age,
            self.gender,
            self.activity_level,
            &self.fitness_goal,
        );
    }

    /// Apply a partial update, recomputing derived values when any
    /// requirement input changed
    pub fn apply_update(&mut self, update: &BiometricUpdate) -> Result<(), ProfileError> {
        if let Some(weight) = update.weight_kg {
            if weight <= 0.0 {
                return Err(ProfileError::InvalidWeight(weight));
            }
        }
        if let Some(height) = update.height_cm {
            if height <= 0.0 {
                return Err(ProfileError::InvalidHeight(height));
            }
        }

        if let Some(ref name) = update.name {
            self.name = name.clone();
        }
        if let Some(weight) = update.weight_kg {
            self.weight_kg = weight;
        }
        if let Some(height) = update.height_cm {
            self.height_cm = height;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(activity) = update.activity_level {
            self.activity_level = activity;
        }
        if let Some(ref goal) = update.fitness_goal {
            self.fitness_goal = goal.clone();
        }
        if let Some(ref issues) = update.health_issues {
            self.health_issues = issues.clone();
        }
        if let Some(ref allergies) = update.allergies {
            self.allergies = allergies.clone();
        }

        if update.changes_requirements() {
            self.recompute_derived();
        }
        self.updated_at = Utc::now();

        Ok(())
    }

    /// Compare consumed totals against this profile's personal targets
    pub fn compare_intake(&self, consumed: &NutrientTotals) -> RdaAnalysis {
        compare_with_rda(consumed, self.gender, Some(&self.daily_requirements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> BiometricInput {
        BiometricInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            fitness_goal: "maintain".to_string(),
        }
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!(Gender::from_str("MALE"), Gender::Male);
        assert_eq!(Gender::from_str("Female"), Gender::Female);
        assert_eq!(Gender::from_str("nonbinary"), Gender::Other);
    }

    #[test]
    fn test_activity_from_str_fallback() {
        assert_eq!(ActivityLevel::from_str("SEDENTARY"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_str("very_active"), ActivityLevel::VeryActive);
        assert_eq!(ActivityLevel::from_str("jogging"), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::from_str(""), ActivityLevel::Moderate);
    }

    #[test]
    fn test_validate_rejects_bad_biometrics() {
        let mut input = sample_input();
        input.weight_kg = 0.0;
        assert!(matches!(
            input.validate(),
            Err(ProfileError::InvalidWeight(_))
        ));

        let mut input = sample_input();
        input.height_cm = -175.0;
        assert!(matches!(
            input.validate(),
            Err(ProfileError::InvalidHeight(_))
        ));
    }

    #[test]
    fn test_new_computes_derived_block() {
        let profile = UserProfile::new("Alex", &sample_input()).unwrap();
        assert_eq!(profile.bmi, 22.86);
        assert_eq!(profile.bmi_category, BmiCategory::Normal);
        assert_eq!(profile.daily_requirements.calories, 2555);
        assert_eq!(profile.daily_requirements.protein, 112);
    }

    #[test]
    fn test_update_recomputes_requirements() {
        let mut profile = UserProfile::new("Alex", &sample_input()).unwrap();

        let update = BiometricUpdate {
            fitness_goal: Some("cut for summer".to_string()),
            ..BiometricUpdate::default()
        };
        profile.apply_update(&update).unwrap();

        assert_eq!(profile.daily_requirements.calories, 2055);
        assert_eq!(profile.daily_requirements.protein, 140);
    }

    #[test]
    fn test_update_name_only_keeps_requirements() {
        let mut profile = UserProfile::new("Alex", &sample_input()).unwrap();
        let before = profile.daily_requirements;

        let update = BiometricUpdate {
            name: Some("Alexandra".to_string()),
            ..BiometricUpdate::default()
        };
        profile.apply_update(&update).unwrap();

        assert_eq!(profile.name, "Alexandra");
        assert_eq!(profile.daily_requirements, before);
    }

    #[test]
    fn test_update_rejects_bad_weight() {
        let mut profile = UserProfile::new("Alex", &sample_input()).unwrap();
        let update = BiometricUpdate {
            weight_kg: Some(-5.0),
            ..BiometricUpdate::default()
        };
        assert!(profile.apply_update(&update).is_err());
        assert_eq!(profile.weight_kg, 70.0);
    }

    #[test]
    fn test_compare_intake_uses_own_requirements() {
        let profile = UserProfile::new("Alex", &sample_input()).unwrap();

        // Matches the profile's targets (2555/112/287/85) exactly; every
        // value differs from the static male reference row, so a fallback
        // to the table would show up in the targets and statuses.
        let consumed = NutrientTotals {
            calories: 2555.0,
            protein: 112.0,
            carbs: 287.0,
            fat: 85.0,
            ..NutrientTotals::zero()
        };
        let analysis = profile.compare_intake(&consumed);

        assert_eq!(
            analysis.calories.target,
            profile.daily_requirements.calories as f64
        );
        assert_eq!(
            analysis.protein.target,
            profile.daily_requirements.protein as f64
        );
        assert_eq!(
            analysis.carbs.target,
            profile.daily_requirements.carbs as f64
        );
        assert_eq!(analysis.fat.target, profile.daily_requirements.fat as f64);
        assert_eq!(analysis.calories.percentage, 100.0);
        assert_eq!(
            analysis.overall_status,
            crate::models::OverallStatus::Balanced
        );
    }

    #[test]
    fn test_biometric_input_lenient_parse() {
        let input: BiometricInput = serde_json::from_str(
            r#"{"weight_kg": 70.0, "height_cm": 175.0, "age": 30, "gender": "MALE", "activity_level": "Very_Active"}"#,
        )
        .unwrap();
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.activity_level, ActivityLevel::VeryActive);
        assert_eq!(input.fitness_goal, "maintain");
    }

    #[test]
    fn test_biometric_input_defaults() {
        let input: BiometricInput = serde_json::from_str(
            r#"{"weight_kg": 60.0, "height_cm": 165.0, "age": 25, "gender": "female"}"#,
        )
        .unwrap();
        assert_eq!(input.activity_level, ActivityLevel::Moderate);
    }
}
