//! Per-ingredient nutrition lookup
//!
//! For each selected fruit: make sure a reference row exists, look up its
//! key, and on a not-found retry once with the singular form. A failure for
//! one fruit is reported in its own entry and never stops the rest.

use cached::{Cached, TimedCache};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use utoipa::ToSchema;

use super::client::NutritionSource;
use super::error::LookupError;
use super::fallback::singular_candidate;
use crate::catalog::{CatalogStore, FruitOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    Found,
    NotFound,
    Error,
}

/// Lookup result for one selected fruit
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NutritionReport {
    #[schema(example = "Blueberries")]
    pub fruit_name: String,
    /// Key that produced the result (or the last key tried)
    #[schema(example = "blueberry")]
    pub search_on: String,
    pub status: LookupStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NutritionReport {
    fn found(fruit_name: &str, search_on: &str, data: Value) -> Self {
        Self {
            fruit_name: fruit_name.to_string(),
            search_on: search_on.to_string(),
            status: LookupStatus::Found,
            data: Some(data),
            message: None,
        }
    }

    fn blank() -> Self {
        Self {
            fruit_name: String::new(),
            search_on: String::new(),
            status: LookupStatus::Error,
            data: None,
            message: Some("No fruit name given.".to_string()),
        }
    }

    fn failed(fruit_name: &str, search_on: &str, err: &LookupError) -> Self {
        let (status, message) = match err {
            LookupError::NotFound => (
                LookupStatus::NotFound,
                format!("Sorry, {} is not in the SmoothieFroot database.", fruit_name),
            ),
            other => (
                LookupStatus::Error,
                format!("Could not fetch nutrition for {} ({}).", fruit_name, other),
            ),
        };
        Self {
            fruit_name: fruit_name.to_string(),
            search_on: search_on.to_string(),
            status,
            data: None,
            message: Some(message),
        }
    }
}

pub struct NutritionService {
    source: Arc<dyn NutritionSource>,
    catalog: Arc<dyn CatalogStore>,
    /// Successful results by lowercased key
    cache: Mutex<TimedCache<String, Value>>,
}

impl NutritionService {
    pub fn new(
        source: Arc<dyn NutritionSource>,
        catalog: Arc<dyn CatalogStore>,
        cache_ttl_secs: u64,
    ) -> Self {
        Self {
            source,
            catalog,
            cache: Mutex::new(TimedCache::with_lifespan(cache_ttl_secs)),
        }
    }

    /// Look up every selected fruit in order
    pub async fn lookup_all<S: AsRef<str>>(&self, fruits: &[S]) -> Vec<NutritionReport> {
        let mut reports = Vec::with_capacity(fruits.len());
        for fruit in fruits {
            reports.push(self.lookup(fruit.as_ref()).await);
        }
        reports
    }

    /// Look up one fruit. Blank names are reported as errors without touching
    /// the catalog or the nutrition source.
    pub async fn lookup(&self, fruit_name: &str) -> NutritionReport {
        let fruit_name = fruit_name.trim();
        if fruit_name.is_empty() {
            return NutritionReport::blank();
        }

        let search_on = self.resolve_search_on(fruit_name).await;

        let err = match self.fetch_cached(&search_on).await {
            Ok(data) => return NutritionReport::found(fruit_name, &search_on, data),
            Err(err) => err,
        };

        if !err.is_not_found() {
            warn!(fruit = fruit_name, search_on = %search_on, error = %err, "Nutrition lookup failed");
            return NutritionReport::failed(fruit_name, &search_on, &err);
        }

        let Some(candidate) = singular_candidate(&search_on) else {
            info!(fruit = fruit_name, search_on = %search_on, "Fruit not in nutrition database");
            return NutritionReport::failed(fruit_name, &search_on, &err);
        };

        info!(fruit = fruit_name, from = %search_on, to = %candidate, "Retrying lookup with singular key");
        match self.fetch_cached(&candidate).await {
            Ok(data) => {
                if let Err(e) = self.catalog.update_search_on(fruit_name, &candidate).await {
                    warn!(fruit = fruit_name, error = %e, "Failed to persist corrected search key");
                } else {
                    info!(fruit = fruit_name, search_on = %candidate, "Corrected search key saved");
                }
                NutritionReport::found(fruit_name, &candidate, data)
            }
            Err(retry_err) => {
                if retry_err.is_not_found() {
                    info!(fruit = fruit_name, "Fruit not in nutrition database");
                } else {
                    warn!(fruit = fruit_name, search_on = %candidate, error = %retry_err, "Nutrition lookup failed");
                }
                NutritionReport::failed(fruit_name, &candidate, &retry_err)
            }
        }
    }

    /// Stored key for `fruit_name`, inserting a reference row if none exists.
    ///
    /// Store failures are logged and the name itself is used as the key.
    async fn resolve_search_on(&self, fruit_name: &str) -> String {
        match self.catalog.find_option(fruit_name).await {
            Ok(Some(option)) => option.search_on,
            Ok(None) => {
                let option = FruitOption::new(fruit_name);
                match self.catalog.insert_option(&option).await {
                    Ok(()) => info!(fruit = fruit_name, "Added missing fruit option"),
                    Err(e) => warn!(fruit = fruit_name, error = %e, "Failed to add fruit option"),
                }
                option.search_on
            }
            Err(e) => {
                warn!(fruit = fruit_name, error = %e, "Failed to read fruit option");
                fruit_name.to_string()
            }
        }
    }

    async fn fetch_cached(&self, search_key: &str) -> Result<Value, LookupError> {
        let cache_key = search_key.to_lowercase();
        if let Some(hit) = self.cache.lock().await.cache_get(&cache_key) {
            return Ok(hit.clone());
        }

        let data = self.source.fetch(search_key).await?;
        self.cache.lock().await.cache_set(cache_key, data.clone());
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;

    /// Answers from a fixed table; records every key it is asked for
    #[derive(Default)]
    struct FakeSource {
        answers: HashMap<String, Result<Value, LookupError>>,
        calls: StdMutex<Vec<String>>,
    }

    impl FakeSource {
        fn with(mut self, key: &str, answer: Result<Value, LookupError>) -> Self {
            self.answers.insert(key.to_string(), answer);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NutritionSource for FakeSource {
        async fn fetch(&self, search_key: &str) -> Result<Value, LookupError> {
            let key = search_key.to_lowercase();
            self.calls.lock().unwrap().push(key.clone());
            self.answers
                .get(&key)
                .cloned()
                .unwrap_or(Err(LookupError::NotFound))
        }
    }

    fn service(
        source: Arc<FakeSource>,
        catalog: Arc<MemoryStore>,
    ) -> NutritionService {
        NutritionService::new(source, catalog, 3600)
    }

    #[tokio::test]
    async fn test_found_directly() {
        let source = Arc::new(FakeSource::default().with("kiwi", Ok(json!({"name": "Kiwi"}))));
        let catalog = Arc::new(MemoryStore::with_options(vec![FruitOption::new("Kiwi")]));
        let svc = service(source.clone(), catalog);

        let report = svc.lookup("Kiwi").await;

        assert_eq!(report.status, LookupStatus::Found);
        assert_eq!(report.data, Some(json!({"name": "Kiwi"})));
        assert_eq!(source.calls(), vec!["kiwi"]);
    }

    #[tokio::test]
    async fn test_ies_retried_as_y_and_persisted() {
        let source =
            Arc::new(FakeSource::default().with("blueberry", Ok(json!([{"name": "Blueberry"}]))));
        let catalog = Arc::new(MemoryStore::with_options(vec![FruitOption::new("Blueberries")]));
        let svc = service(source.clone(), catalog.clone());

        let report = svc.lookup("Blueberries").await;

        assert_eq!(report.status, LookupStatus::Found);
        assert_eq!(report.search_on, "Blueberry");
        assert_eq!(source.calls(), vec!["blueberries", "blueberry"]);

        let option = catalog.find_option("Blueberries").await.unwrap().unwrap();
        assert_eq!(option.search_on, "Blueberry");
    }

    #[tokio::test]
    async fn test_plain_s_retried_without_s() {
        let source = Arc::new(FakeSource::default().with("apple", Ok(json!({"name": "Apple"}))));
        let catalog = Arc::new(MemoryStore::with_options(vec![FruitOption::new("Apples")]));
        let svc = service(source.clone(), catalog);

        let report = svc.lookup("Apples").await;

        assert_eq!(report.status, LookupStatus::Found);
        assert_eq!(source.calls(), vec!["apples", "apple"]);
    }

    #[tokio::test]
    async fn test_corrected_key_used_next_time() {
        let source = Arc::new(FakeSource::default().with("apple", Ok(json!({"name": "Apple"}))));
        let catalog = Arc::new(MemoryStore::with_options(vec![FruitOption::new("Apples")]));

        service(source.clone(), catalog.clone()).lookup("Apples").await;
        // fresh service, empty cache: goes straight to the corrected key
        service(source.clone(), catalog).lookup("Apples").await;

        assert_eq!(source.calls(), vec!["apples", "apple", "apple"]);
    }

    #[tokio::test]
    async fn test_not_found_after_retry() {
        let source = Arc::new(FakeSource::default());
        let catalog = Arc::new(MemoryStore::with_options(vec![FruitOption::new("Ximenias")]));
        let svc = service(source.clone(), catalog.clone());

        let report = svc.lookup("Ximenias").await;

        assert_eq!(report.status, LookupStatus::NotFound);
        assert_eq!(source.calls(), vec!["ximenias", "ximenia"]);
        // key unchanged when the retry also misses
        let option = catalog.find_option("Ximenias").await.unwrap().unwrap();
        assert_eq!(option.search_on, "Ximenias");
    }

    #[tokio::test]
    async fn test_no_retry_without_plural_suffix() {
        let source = Arc::new(FakeSource::default());
        let catalog = Arc::new(MemoryStore::with_options(vec![FruitOption::new("Ximenia")]));
        let svc = service(source.clone(), catalog);

        let report = svc.lookup("Ximenia").await;

        assert_eq!(report.status, LookupStatus::NotFound);
        assert_eq!(source.calls(), vec!["ximenia"]);
        assert!(report.message.unwrap().contains("Ximenia"));
    }

    #[tokio::test]
    async fn test_other_errors_not_retried() {
        let source = Arc::new(FakeSource::default().with("limes", Err(LookupError::Status(500))));
        let catalog = Arc::new(MemoryStore::with_options(vec![FruitOption::new("Limes")]));
        let svc = service(source.clone(), catalog);

        let report = svc.lookup("Limes").await;

        assert_eq!(report.status, LookupStatus::Error);
        assert_eq!(source.calls(), vec!["limes"]);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_stop_the_rest() {
        let source = Arc::new(
            FakeSource::default()
                .with("kiwi", Err(LookupError::Transport("timed out".to_string())))
                .with("lime", Ok(json!({"name": "Lime"}))),
        );
        let catalog = Arc::new(MemoryStore::seeded());
        let svc = service(source, catalog);

        let reports = svc.lookup_all(&["Kiwi", "Ximenia", "Lime"]).await;

        let statuses: Vec<LookupStatus> = reports.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![LookupStatus::Error, LookupStatus::NotFound, LookupStatus::Found]
        );
        assert_eq!(reports[2].fruit_name, "Lime");
    }

    #[tokio::test]
    async fn test_unknown_fruit_is_added_to_catalog() {
        let source = Arc::new(FakeSource::default().with("starfruit", Ok(json!({}))));
        let catalog = Arc::new(MemoryStore::new());
        let svc = service(source, catalog.clone());

        svc.lookup("Starfruit").await;

        let option = catalog.find_option("Starfruit").await.unwrap().unwrap();
        assert_eq!(option, FruitOption::new("Starfruit"));
    }

    #[tokio::test]
    async fn test_blank_names_are_not_added_or_fetched() {
        let source = Arc::new(FakeSource::default());
        let catalog = Arc::new(MemoryStore::new());
        let svc = service(source.clone(), catalog.clone());

        let reports = svc.lookup_all(&["", "   "]).await;

        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.status == LookupStatus::Error));
        assert!(catalog.list_options().await.unwrap().is_empty());
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_success_is_cached_failures_are_not() {
        let source = Arc::new(
            FakeSource::default()
                .with("kiwi", Ok(json!({"name": "Kiwi"})))
                .with("lime", Err(LookupError::Status(503))),
        );
        let catalog = Arc::new(MemoryStore::seeded());
        let svc = service(source.clone(), catalog);

        svc.lookup("Kiwi").await;
        svc.lookup("Kiwi").await;
        svc.lookup("Lime").await;
        svc.lookup("Lime").await;

        assert_eq!(source.calls(), vec!["kiwi", "lime", "lime"]);
    }
}
