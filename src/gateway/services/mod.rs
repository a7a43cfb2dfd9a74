//! Gateway Services Layer
//!
//! Business logic extracted from handlers. Handlers stay thin HTTP adapters.

pub mod order;

pub use order::{OrderError, OrderResult, OrderService};
