//! Fruit list handler

use std::sync::Arc;

use axum::extract::State;

use crate::catalog::FruitOption;

use super::super::cache::load_options_cached;
use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ok};

/// List selectable fruits
///
/// GET /api/v1/fruits
#[utoipa::path(
    get,
    path = "/api/v1/fruits",
    responses(
        (status = 200, description = "Fruit options ordered by name", content_type = "application/json"),
        (status = 500, description = "Reference table unavailable")
    ),
    tag = "Catalog"
)]
pub async fn list_fruits(State(state): State<Arc<AppState>>) -> ApiResult<Vec<FruitOption>> {
    let options = if state.pg_db.is_some() {
        load_options_cached(state.catalog.clone())
            .await
            .map_err(|e| ApiError::internal("Failed to load fruit options").with_detail(e))?
    } else {
        state.catalog.list_options().await.map_err(|e| {
            ApiError::internal("Failed to load fruit options").with_detail(e)
        })?
    };

    ok(options)
}
