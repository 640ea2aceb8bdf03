//! Fitness targets engine
//!
//! Pure calculation core for a fitness/nutrition tracker: derives daily
//! calorie and macronutrient targets from a user profile, and aggregates
//! logged food and exercise entries into daily totals and progress.

pub mod models;
pub mod summary;
pub mod targets;
