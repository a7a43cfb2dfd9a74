//! Order request and response DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Ordered fruit selection
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SelectionRequest {
    #[schema(example = json!(["Apple", "Lime", "Ximenia"]))]
    pub ingredients: Vec<String>,
}

/// Order submission
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    /// Selected fruits, in selection order
    #[schema(example = json!(["Apple", "Lime", "Ximenia"]))]
    pub ingredients: Vec<String>,
    #[schema(example = "Kevin")]
    pub name_on_order: String,
    #[serde(default)]
    pub order_filled: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PreviewData {
    #[schema(example = "Apple, Lime and Ximenia")]
    pub ingredients_string: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlacedOrderData {
    #[schema(example = 1)]
    pub order_uid: i64,
    pub name_on_order: String,
    pub ingredients: String,
    pub order_filled: bool,
    #[schema(example = "Order #1 placed for Kevin!")]
    pub message: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrdersQuery {
    /// Maximum number of orders to return (default 50, max 500)
    pub limit: Option<i64>,
}
