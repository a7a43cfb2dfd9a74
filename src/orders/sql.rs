//! SQL literal rendering
//!
//! Writes go through bound parameters. The rendered statement here is only
//! used for debug logging, so it must stay well-formed for any input.

use super::models::OrderDraft;

/// Quote a string as a SQL literal, doubling embedded single quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Inverse of [`quote_literal`]. Returns `None` if `literal` is not a
/// well-formed single-quoted literal.
pub fn unquote_literal(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('\'')?.strip_suffix('\'')?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\'' {
            // lone quote inside the literal
            if chars.next() != Some('\'') {
                return None;
            }
        }
        out.push(c);
    }
    Some(out)
}

/// Render the insert statement equivalent to the parameterized write.
pub fn render_order_insert(order_uid: i64, draft: &OrderDraft) -> String {
    format!(
        "INSERT INTO orders (order_uid, name_on_order, ingredients, order_filled) VALUES ({}, {}, {}, {})",
        order_uid,
        quote_literal(&draft.name_on_order),
        quote_literal(&draft.ingredients),
        if draft.order_filled { "TRUE" } else { "FALSE" }
    )
}
