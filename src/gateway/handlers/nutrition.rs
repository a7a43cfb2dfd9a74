//! Nutrition lookup handler

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::nutrition::NutritionReport;

use super::super::state::AppState;
use super::super::types::{ApiResult, SelectionRequest, ok};
use super::helpers::check_selection;

/// Nutrition facts for each selected fruit
///
/// POST /api/v1/nutrition
///
/// Always answers 200 for a valid selection: per-fruit failures are reported
/// in that fruit's entry.
#[utoipa::path(
    post,
    path = "/api/v1/nutrition",
    request_body = SelectionRequest,
    responses(
        (status = 200, description = "One report per selected fruit, in selection order", content_type = "application/json"),
        (status = 400, description = "Too many ingredients")
    ),
    tag = "Nutrition"
)]
pub async fn lookup_nutrition(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SelectionRequest>, JsonRejection>,
) -> ApiResult<Vec<NutritionReport>> {
    let Json(req) = payload?;
    check_selection(&req.ingredients, state.order_config.max_selections)?;

    let reports = state.nutrition.lookup_all(&req.ingredients).await;
    ok(reports)
}
