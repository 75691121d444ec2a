//! NutriScan Engine Library
//!
//! Core calculations for nutrition profiling: BMI, daily requirements,
//! and RDA intake analysis.

pub mod models;
pub mod nutrition;
