//! Data models
//!
//! Rust structs exchanged between the engine and its callers.

mod analysis;
mod nutrition;
mod profile;

pub use analysis::{
    IncreaseSuggestion, NutrientAnalysis, NutrientStatus, OverallStatus, RdaAnalysis,
    ReduceSuggestion, Suggestions, TrackedNutrient,
};
pub use nutrition::{MacroCalories, NutrientTotals};
pub use profile::{
    ActivityLevel, BiometricInput, BiometricUpdate, DailyRequirements, Gender, ProfileError,
    UserProfile,
};
