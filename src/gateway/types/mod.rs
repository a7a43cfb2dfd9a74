//! Gateway types module
//!
//! ## Input Types
//! - [`SelectionRequest`]: fruit selection for previews and lookups
//! - [`PlaceOrderRequest`]: order submission
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: Unified API response wrapper
//! - [`ApiError`]: Error envelope with HTTP status

pub mod order;
pub mod response;

pub use order::{OrdersQuery, PlaceOrderRequest, PlacedOrderData, PreviewData, SelectionRequest};
pub use response::{ApiError, ApiResponse, ApiResult, created, error_codes, ok};
