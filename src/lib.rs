//! Smoothie Orders - custom smoothie order service
//!
//! # Modules
//!
//! - [`catalog`] - Fruit reference table (names and lookup keys)
//! - [`orders`] - Ingredients formatting, validation and order storage
//! - [`nutrition`] - SmoothieFroot lookups with plural fallback and caching
//! - [`memory`] - In-memory store for running without PostgreSQL
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`gateway`] - HTTP API
//! - [`config`] / [`logging`] - Startup configuration and tracing setup

pub mod config;
pub mod logging;

pub mod catalog;
pub mod db;
pub mod memory;
pub mod nutrition;
pub mod orders;

pub mod gateway;

// Convenient re-exports at crate root
pub use catalog::{CatalogStore, FruitOption};
pub use config::AppConfig;
pub use db::{Database, StoreError};
pub use memory::MemoryStore;
pub use nutrition::{FrootClient, LookupError, NutritionReport, NutritionService, NutritionSource};
pub use orders::{FormatStyle, Order, OrderDraft, OrderStore, OrderValidationError};
