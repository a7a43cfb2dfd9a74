//! Order persistence

use async_trait::async_trait;
use sqlx::PgPool;

use super::models::{Order, OrderDraft};
use super::sql::render_order_insert;
use crate::db::StoreError;

/// Default and maximum page size for order listings
pub const DEFAULT_ORDER_LIMIT: i64 = 50;
pub const MAX_ORDER_LIMIT: i64 = 500;

/// Storage for smoothie orders
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Assign `max(order_uid) + 1` (1 on an empty table) and append the order.
    ///
    /// The id is not reserved: two concurrent writers can be assigned the same
    /// value.
    async fn place_order(&self, draft: &OrderDraft) -> Result<i64, StoreError>;

    /// Most recent orders first
    async fn recent_orders(&self, limit: i64) -> Result<Vec<Order>, StoreError>;
}

/// PostgreSQL-backed order store
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderRepository {
    async fn place_order(&self, draft: &OrderDraft) -> Result<i64, StoreError> {
        let mut tx = self.pool.begin().await?;

        let next_id: i64 =
            sqlx::query_scalar(r#"SELECT COALESCE(MAX(order_uid), 0) + 1 FROM orders"#)
                .fetch_one(&mut *tx)
                .await?;

        tracing::debug!(sql = %render_order_insert(next_id, draft), "Placing order");

        sqlx::query(
            r#"INSERT INTO orders (order_uid, name_on_order, ingredients, order_filled)
               VALUES ($1, $2, $3, $4)"#,
        )
        .bind(next_id)
        .bind(&draft.name_on_order)
        .bind(&draft.ingredients)
        .bind(draft.order_filled)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(next_id)
    }

    async fn recent_orders(&self, limit: i64) -> Result<Vec<Order>, StoreError> {
        let rows: Vec<Order> = sqlx::query_as(
            r#"SELECT order_uid, name_on_order, ingredients, order_filled, order_ts
               FROM orders ORDER BY order_ts DESC, order_uid DESC LIMIT $1"#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
