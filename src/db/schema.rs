use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::catalog::DEFAULT_FRUITS;

const CREATE_FRUIT_OPTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS fruit_options (
    fruit_name VARCHAR(100) PRIMARY KEY,
    search_on  VARCHAR(100) NOT NULL
)
"#;

// No uniqueness on order_uid: ids come from max + 1
const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    order_uid     BIGINT       NOT NULL,
    name_on_order VARCHAR(100) NOT NULL,
    ingredients   VARCHAR(200) NOT NULL,
    order_filled  BOOLEAN      NOT NULL DEFAULT FALSE,
    order_ts      TIMESTAMPTZ  NOT NULL DEFAULT now()
)
"#;

const CREATE_ORDERS_TS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_orders_order_ts ON orders (order_ts DESC)";

/// Create tables if missing and seed the fruit list into an empty table.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    tracing::info!("Initializing PostgreSQL schema...");

    sqlx::query(CREATE_FRUIT_OPTIONS_TABLE)
        .execute(pool)
        .await
        .context("Failed to create fruit_options table")?;

    sqlx::query(CREATE_ORDERS_TABLE)
        .execute(pool)
        .await
        .context("Failed to create orders table")?;

    sqlx::query(CREATE_ORDERS_TS_INDEX)
        .execute(pool)
        .await
        .context("Failed to create orders index")?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM fruit_options")
        .fetch_one(pool)
        .await
        .context("Failed to count fruit options")?;

    if count == 0 {
        for fruit in DEFAULT_FRUITS {
            sqlx::query(
                "INSERT INTO fruit_options (fruit_name, search_on) VALUES ($1, $1) \
                 ON CONFLICT (fruit_name) DO NOTHING",
            )
            .bind(*fruit)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to seed fruit option {}", fruit))?;
        }
        tracing::info!("Seeded {} fruit options", DEFAULT_FRUITS.len());
    }

    tracing::info!("✅ Schema ready");
    Ok(())
}
