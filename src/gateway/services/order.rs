//! Order Service - Business logic for order operations
//!
//! Keeps formatting, validation and the write out of the HTTP handlers.

use crate::db::StoreError;
use crate::orders::{
    FormatStyle, OrderLimits, OrderStore, OrderValidationError, non_blank, validate_order,
};

/// Order service error
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// Submission rejected, nothing written
    #[error(transparent)]
    Invalid(#[from] OrderValidationError),

    /// Write failed
    #[error("Failed to place order: {0}")]
    Store(#[from] StoreError),
}

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderResult {
    pub order_uid: i64,
    pub name_on_order: String,
    pub ingredients: String,
    pub order_filled: bool,
}

/// Order Service - formats, validates and writes orders
pub struct OrderService<'a> {
    orders: &'a dyn OrderStore,
    style: FormatStyle,
    limits: OrderLimits,
}

impl<'a> OrderService<'a> {
    pub fn new(orders: &'a dyn OrderStore, style: FormatStyle, limits: OrderLimits) -> Self {
        Self {
            orders,
            style,
            limits,
        }
    }

    /// Ingredients string as it would be stored
    pub fn preview<S: AsRef<str>>(&self, ingredients: &[S]) -> String {
        self.style.format(&non_blank(ingredients))
    }

    /// Validate the submission and append it to the orders table
    pub async fn place_order<S: AsRef<str>>(
        &self,
        ingredients: &[S],
        name_on_order: &str,
        order_filled: bool,
    ) -> Result<OrderResult, OrderError> {
        let picked = non_blank(ingredients);
        let ingredients_string = self.style.format(&picked);
        let draft = validate_order(
            &picked,
            &ingredients_string,
            name_on_order,
            order_filled,
            self.limits,
        )?;

        let order_uid = self.orders.place_order(&draft).await.map_err(|e| {
            tracing::error!(error = %e, name = %draft.name_on_order, "Order write failed");
            e
        })?;

        tracing::info!(
            order_uid,
            name = %draft.name_on_order,
            ingredients = %draft.ingredients,
            filled = draft.order_filled,
            "Order placed"
        );

        Ok(OrderResult {
            order_uid,
            name_on_order: draft.name_on_order,
            ingredients: draft.ingredients,
            order_filled: draft.order_filled,
        })
    }
}
