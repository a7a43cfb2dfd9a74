//! Order handlers (preview, place, list)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::orders::{DEFAULT_ORDER_LIMIT, MAX_ORDER_LIMIT, OrderView};

use super::super::services::OrderError;
use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResult, OrdersQuery, PlaceOrderRequest, PlacedOrderData, PreviewData,
    SelectionRequest, created, error_codes, ok,
};
use super::helpers::check_selection;

const ORDER_FAILED_MSG: &str = "Something went wrong while placing your order. Please try again.";

/// Preview the ingredients string
///
/// POST /api/v1/orders/preview
#[utoipa::path(
    post,
    path = "/api/v1/orders/preview",
    request_body = SelectionRequest,
    responses(
        (status = 200, description = "Formatted ingredients string", content_type = "application/json"),
        (status = 400, description = "Too many ingredients")
    ),
    tag = "Orders"
)]
pub async fn preview_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SelectionRequest>, JsonRejection>,
) -> ApiResult<PreviewData> {
    let Json(req) = payload?;
    check_selection(&req.ingredients, state.order_config.max_selections)?;

    ok(PreviewData {
        ingredients_string: state.order_service().preview(&req.ingredients),
    })
}

/// Place an order
///
/// POST /api/v1/orders
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed", content_type = "application/json"),
        (status = 400, description = "Submission rejected"),
        (status = 500, description = "Order could not be written")
    ),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> ApiResult<PlacedOrderData> {
    let Json(req) = payload?;
    tracing::info!(
        name = %req.name_on_order,
        count = req.ingredients.len(),
        "Order submission received"
    );
    check_selection(&req.ingredients, state.order_config.max_selections)?;

    let result = state
        .order_service()
        .place_order(&req.ingredients, &req.name_on_order, req.order_filled)
        .await
        .map_err(|e| match e {
            OrderError::Invalid(invalid) => ApiError::bad_request(invalid),
            OrderError::Store(cause) => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::ORDER_WRITE_FAILED,
                ORDER_FAILED_MSG,
            )
            .with_detail(cause),
        })?;

    created(PlacedOrderData {
        message: format!(
            "Order #{} placed for {}!",
            result.order_uid, result.name_on_order
        ),
        order_uid: result.order_uid,
        name_on_order: result.name_on_order,
        ingredients: result.ingredients,
        order_filled: result.order_filled,
    })
}

/// Recent orders, newest first
///
/// GET /api/v1/orders
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    params(OrdersQuery),
    responses(
        (status = 200, description = "Orders with ingredients hash", content_type = "application/json"),
        (status = 500, description = "Orders table unavailable")
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OrdersQuery>,
) -> ApiResult<Vec<OrderView>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_ORDER_LIMIT)
        .clamp(1, MAX_ORDER_LIMIT);

    let orders = state
        .orders
        .recent_orders(limit)
        .await
        .map_err(|e| ApiError::internal("Failed to load orders").with_detail(e))?;

    ok(orders.into_iter().map(OrderView::from).collect())
}
