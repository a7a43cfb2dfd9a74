//! Smoothie orders: formatting, validation and persistence

pub mod format;
pub mod models;
pub mod repository;
pub mod sql;
pub mod validation;

pub use format::{FormatStyle, join_english, join_space, non_blank};
pub use models::{Order, OrderDraft, OrderView, ingredients_hash};
pub use repository::{DEFAULT_ORDER_LIMIT, MAX_ORDER_LIMIT, OrderStore, PgOrderRepository};
pub use sql::{quote_literal, render_order_insert, unquote_literal};
pub use validation::{OrderLimits, OrderValidationError, validate_order};
