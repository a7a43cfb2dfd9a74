use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::config::OrderConfig;
use crate::db::Database;
use crate::nutrition::NutritionService;
use crate::orders::{OrderLimits, OrderStore};

use super::services::OrderService;

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    /// Fruit reference table
    pub catalog: Arc<dyn CatalogStore>,
    /// Orders table
    pub orders: Arc<dyn OrderStore>,
    pub nutrition: Arc<NutritionService>,
    pub order_config: OrderConfig,
    /// PostgreSQL handle; `None` when running on the in-memory store
    pub pg_db: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        orders: Arc<dyn OrderStore>,
        nutrition: Arc<NutritionService>,
        order_config: OrderConfig,
        pg_db: Option<Arc<Database>>,
    ) -> Self {
        Self {
            catalog,
            orders,
            nutrition,
            order_config,
            pg_db,
        }
    }

    pub fn order_service(&self) -> OrderService<'_> {
        OrderService::new(
            self.orders.as_ref(),
            self.order_config.format_style,
            OrderLimits {
                max_ingredients_len: self.order_config.max_ingredients_len,
                max_name_len: self.order_config.max_name_len,
            },
        )
    }
}
