//! HTTP handlers

pub mod catalog;
pub mod health;
pub mod helpers;
pub mod nutrition;
pub mod order;

pub use catalog::list_fruits;
pub use health::{HealthResponse, health_check};
pub use nutrition::lookup_nutrition;
pub use order::{list_orders, place_order, preview_order};
