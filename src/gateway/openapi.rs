//! OpenAPI Documentation
//!
//! Served as JSON at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::catalog::FruitOption;
use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{PlaceOrderRequest, PlacedOrderData, PreviewData, SelectionRequest};
use crate::nutrition::{LookupStatus, NutritionReport};
use crate::orders::{FormatStyle, OrderView};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Smoothie Orders API",
        version = "0.1.0",
        description = "Pick fruits, check their nutrition facts and place smoothie orders.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::catalog::list_fruits,
        crate::gateway::handlers::nutrition::lookup_nutrition,
        crate::gateway::handlers::order::preview_order,
        crate::gateway::handlers::order::place_order,
        crate::gateway::handlers::order::list_orders,
    ),
    components(
        schemas(
            HealthResponse,
            FruitOption,
            SelectionRequest,
            PlaceOrderRequest,
            PreviewData,
            PlacedOrderData,
            OrderView,
            FormatStyle,
            NutritionReport,
            LookupStatus,
        )
    ),
    tags(
        (name = "System", description = "Health"),
        (name = "Catalog", description = "Selectable fruits"),
        (name = "Nutrition", description = "Per-fruit nutrition lookup"),
        (name = "Orders", description = "Order preview, intake and listing"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_order_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/orders"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/orders/preview"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/nutrition"));
    }
}
