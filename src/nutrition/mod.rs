//! Nutrition facts from the SmoothieFroot API

pub mod client;
pub mod error;
pub mod fallback;
pub mod service;

pub use client::{FrootClient, NutritionSource};
pub use error::LookupError;
pub use fallback::singular_candidate;
pub use service::{LookupStatus, NutritionReport, NutritionService};
