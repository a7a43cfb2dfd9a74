//! Ingredients string formatting
//!
//! Turns the ordered list of selected fruit names into the single string
//! that is previewed to the customer and stored on the order row.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How selected ingredients are joined into one string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FormatStyle {
    /// `"Apple Lime Ximenia"`
    Space,
    /// `"Apple, Lime and Ximenia"`
    #[default]
    English,
}

impl FormatStyle {
    pub fn format<S: AsRef<str>>(self, items: &[S]) -> String {
        match self {
            FormatStyle::Space => join_space(items),
            FormatStyle::English => join_english(items),
        }
    }
}

/// Selected names trimmed, with blank entries dropped.
pub fn non_blank<S: AsRef<str>>(items: &[S]) -> Vec<&str> {
    items
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Join with single spaces; empty input gives an empty string.
pub fn join_space<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// English list: `A`, `A and B`, `A, B and C`.
pub fn join_english<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let prefix = head
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} and {}", prefix, last.as_ref())
        }
    }
}
