//! Fruit reference table

pub mod models;
pub mod repository;

pub use models::{DEFAULT_FRUITS, FruitOption};
pub use repository::{CatalogStore, PgCatalogRepository};
