//! Handler helper functions

use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::StatusCode;

use crate::orders::non_blank;

use super::super::types::{ApiError, error_codes};

/// Reject selections longer than the configured maximum. Blank entries are
/// not counted.
pub fn check_selection(ingredients: &[String], max_selections: usize) -> Result<(), ApiError> {
    let picked = non_blank(ingredients).len();
    if picked > max_selections {
        return ApiError::new(
            StatusCode::BAD_REQUEST,
            error_codes::TOO_MANY_INGREDIENTS,
            format!(
                "Choose up to {} ingredients (got {}).",
                max_selections, picked
            ),
        )
        .into_err();
    }
    Ok(())
}

/// Get current time in milliseconds
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
