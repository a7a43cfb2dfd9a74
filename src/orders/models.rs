//! Order data models

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Validated order, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub name_on_order: String,
    pub ingredients: String,
    pub order_filled: bool,
}

/// Stored order row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Order {
    pub order_uid: i64,
    pub name_on_order: String,
    pub ingredients: String,
    pub order_filled: bool,
    pub order_ts: DateTime<Utc>,
}

impl Order {
    /// Hex MD5 of the ingredients string
    pub fn ingredients_hash(&self) -> String {
        ingredients_hash(&self.ingredients)
    }
}

pub fn ingredients_hash(ingredients: &str) -> String {
    format!("{:x}", md5::compute(ingredients.as_bytes()))
}

/// Order as listed to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderView {
    #[schema(example = 1)]
    pub order_uid: i64,
    #[schema(example = "Kevin")]
    pub name_on_order: String,
    #[schema(example = "Apple, Lime and Ximenia")]
    pub ingredients: String,
    pub order_filled: bool,
    pub order_ts: DateTime<Utc>,
    /// Hex MD5 of `ingredients`
    pub ingredients_hash: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        let ingredients_hash = order.ingredients_hash();
        Self {
            order_uid: order.order_uid,
            name_on_order: order.name_on_order,
            ingredients: order.ingredients,
            order_filled: order.order_filled,
            order_ts: order.order_ts,
            ingredients_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredients_hash_is_md5_hex() {
        assert_eq!(ingredients_hash(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(ingredients_hash("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_view_carries_hash() {
        let order = Order {
            order_uid: 7,
            name_on_order: "Kevin".to_string(),
            ingredients: "abc".to_string(),
            order_filled: true,
            order_ts: Utc::now(),
        };

        let view = OrderView::from(order);
        assert_eq!(view.order_uid, 7);
        assert_eq!(view.ingredients_hash, "900150983cd24fb0d6963f7d28e17f72");
        assert!(view.order_filled);
    }
}
