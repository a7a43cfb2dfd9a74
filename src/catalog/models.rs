//! Reference data models

use serde::Serialize;
use utoipa::ToSchema;

/// A selectable fruit and the key used to look it up in the nutrition API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct FruitOption {
    #[schema(example = "Blueberries")]
    pub fruit_name: String,
    #[schema(example = "blueberry")]
    pub search_on: String,
}

impl FruitOption {
    /// New option whose lookup key is the name itself
    pub fn new(fruit_name: impl Into<String>) -> Self {
        let fruit_name = fruit_name.into();
        Self {
            search_on: fruit_name.clone(),
            fruit_name,
        }
    }

    pub fn with_search_on(fruit_name: impl Into<String>, search_on: impl Into<String>) -> Self {
        Self {
            fruit_name: fruit_name.into(),
            search_on: search_on.into(),
        }
    }
}

/// Fruits seeded into an empty reference table
pub const DEFAULT_FRUITS: &[&str] = &[
    "Apples",
    "Blueberries",
    "Cantaloupe",
    "Dragon Fruit",
    "Elderberries",
    "Figs",
    "Guava",
    "Honeydew",
    "Jackfruit",
    "Kiwi",
    "Lime",
    "Mango",
    "Nectarine",
    "Papaya",
    "Raspberries",
    "Strawberries",
    "Tangerine",
    "Vanilla Fruit",
    "Watermelon",
    "Ximenia",
    "Yerba Mate",
    "Ziziphus Jujube",
];
