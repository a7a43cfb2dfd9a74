//! Smoothie Orders - HTTP entry point
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌──────────────┐
//! │  Config  │───▶│  Gateway  │───▶│ Orders store │
//! │  (YAML)  │    │  (axum)   │    │ (PG/memory)  │
//! └──────────┘    └─────┬─────┘    └──────────────┘
//!                       │
//!                       ▼
//!                ┌──────────────┐
//!                │ SmoothieFroot│
//!                │  (reqwest)   │
//!                └──────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;

use smoothie_orders::catalog::{CatalogStore, PgCatalogRepository};
use smoothie_orders::config::AppConfig;
use smoothie_orders::db::{Database, init_schema};
use smoothie_orders::gateway::{self, state::AppState};
use smoothie_orders::memory::MemoryStore;
use smoothie_orders::nutrition::{FrootClient, NutritionService};
use smoothie_orders::orders::{OrderStore, PgOrderRepository};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let app_config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ FATAL: {:#}", e);
            std::process::exit(1);
        }
    };
    let _log_guard = smoothie_orders::logging::init_logging(&app_config);

    tracing::info!(
        "Starting Smoothie Orders ({}) in {} mode",
        env!("GIT_HASH"),
        env
    );

    if let Err(e) = run(app_config).await {
        tracing::error!("FATAL: {:#}", e);
        eprintln!("❌ FATAL: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let (catalog, orders, pg_db) = match config.postgres_url.as_deref() {
        Some(url) => {
            let db = Database::connect(url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            init_schema(db.pool()).await?;

            let catalog: Arc<dyn CatalogStore> =
                Arc::new(PgCatalogRepository::new(db.pool().clone()));
            let orders: Arc<dyn OrderStore> = Arc::new(PgOrderRepository::new(db.pool().clone()));
            (catalog, orders, Some(Arc::new(db)))
        }
        None => {
            tracing::warn!("⚠️  No postgres_url configured, orders are kept in memory");
            let store = Arc::new(MemoryStore::seeded());
            let catalog: Arc<dyn CatalogStore> = store.clone();
            let orders: Arc<dyn OrderStore> = store;
            (catalog, orders, None)
        }
    };

    let client = FrootClient::new(&config.nutrition).context("Failed to build nutrition client")?;
    let nutrition = Arc::new(NutritionService::new(
        Arc::new(client),
        catalog.clone(),
        config.nutrition.cache_ttl_secs,
    ));
    tracing::info!(
        base_url = %config.nutrition.base_url,
        cache_ttl_secs = config.nutrition.cache_ttl_secs,
        "Nutrition lookups enabled"
    );

    let state = Arc::new(AppState::new(
        catalog,
        orders,
        nutrition,
        config.order.clone(),
        pg_db,
    ));

    let port = get_port_override().unwrap_or(config.gateway.port);
    gateway::run_server(&config.gateway.host, port, state).await
}
