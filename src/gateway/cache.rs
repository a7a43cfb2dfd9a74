//! TTL-based cache for the fruit list
//!
//! Reads of the reference table are cached for 5 seconds. Rows added by
//! the lookup fallback show up once the entry expires.

use cached::proc_macro::cached;
use std::sync::Arc;

use crate::catalog::{CatalogStore, FruitOption};

/// Load all fruit options with caching
#[cached(
    time = 5,
    key = "String",
    convert = r#"{ "fruit_options".to_string() }"#,
    result = true
)]
pub async fn load_options_cached(catalog: Arc<dyn CatalogStore>) -> Result<Vec<FruitOption>, String> {
    tracing::debug!("[cache] Loading fruit options from database");
    catalog
        .list_options()
        .await
        .map_err(|e| format!("Failed to load fruit options: {}", e))
}
