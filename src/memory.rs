//! In-memory store
//!
//! Implements the catalog and order stores without a database. Used when no
//! `postgres_url` is configured, and by tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::catalog::{CatalogStore, DEFAULT_FRUITS, FruitOption};
use crate::db::StoreError;
use crate::orders::{Order, OrderDraft, OrderStore};

#[derive(Default)]
pub struct MemoryStore {
    /// Keyed by fruit name, which also gives name ordering
    options: RwLock<BTreeMap<String, String>>,
    orders: RwLock<Vec<Order>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the default fruit list
    pub fn seeded() -> Self {
        Self::with_options(DEFAULT_FRUITS.iter().map(|f| FruitOption::new(*f)))
    }

    pub fn with_options(options: impl IntoIterator<Item = FruitOption>) -> Self {
        let options = options
            .into_iter()
            .map(|o| (o.fruit_name, o.search_on))
            .collect();
        Self {
            options: RwLock::new(options),
            orders: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_options(&self) -> Result<Vec<FruitOption>, StoreError> {
        let options = self.options.read().await;
        Ok(options
            .iter()
            .map(|(name, key)| FruitOption::with_search_on(name.clone(), key.clone()))
            .collect())
    }

    async fn find_option(&self, fruit_name: &str) -> Result<Option<FruitOption>, StoreError> {
        let options = self.options.read().await;
        Ok(options
            .get(fruit_name)
            .map(|key| FruitOption::with_search_on(fruit_name, key.clone())))
    }

    async fn insert_option(&self, option: &FruitOption) -> Result<(), StoreError> {
        let mut options = self.options.write().await;
        options
            .entry(option.fruit_name.clone())
            .or_insert_with(|| option.search_on.clone());
        Ok(())
    }

    async fn update_search_on(&self, fruit_name: &str, search_on: &str) -> Result<(), StoreError> {
        let mut options = self.options.write().await;
        match options.get_mut(fruit_name) {
            Some(key) => {
                *key = search_on.to_string();
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("fruit option '{}'", fruit_name))),
        }
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn place_order(&self, draft: &OrderDraft) -> Result<i64, StoreError> {
        let mut orders = self.orders.write().await;
        let next_id = orders.iter().map(|o| o.order_uid).max().unwrap_or(0) + 1;

        orders.push(Order {
            order_uid: next_id,
            name_on_order: draft.name_on_order.clone(),
            ingredients: draft.ingredients.clone(),
            order_filled: draft.order_filled,
            order_ts: Utc::now(),
        });
        Ok(next_id)
    }

    async fn recent_orders(&self, limit: i64) -> Result<Vec<Order>, StoreError> {
        let orders = self.orders.read().await;
        let mut recent: Vec<Order> = orders.clone();
        recent.sort_by(|a, b| {
            b.order_ts
                .cmp(&a.order_ts)
                .then(b.order_uid.cmp(&a.order_uid))
        });
        recent.truncate(limit.max(0) as usize);
        Ok(recent)
    }
}
