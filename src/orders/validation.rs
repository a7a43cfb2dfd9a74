//! Order submission checks
//!
//! Checks run in a fixed order and stop at the first failure, so the customer
//! always sees the earliest problem with the submission.

use super::models::OrderDraft;

/// User-correctable submission errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderValidationError {
    #[error("Please choose at least one ingredient.")]
    NoIngredients,

    #[error("Ingredients exceed {max} characters.")]
    IngredientsTooLong { max: usize, actual: usize },

    #[error("Please provide a name for the smoothie.")]
    MissingName,

    #[error("Name on order exceeds {max} characters.")]
    NameTooLong { max: usize, actual: usize },
}

/// Length limits, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLimits {
    pub max_ingredients_len: usize,
    pub max_name_len: usize,
}

impl Default for OrderLimits {
    fn default() -> Self {
        Self {
            max_ingredients_len: 200,
            max_name_len: 100,
        }
    }
}

/// Validate a submission and produce the draft to be written.
///
/// `ingredients_string` is the formatted selection; `name_on_order` is taken
/// as typed and trimmed here. Blank selections do not count as ingredients.
pub fn validate_order<S: AsRef<str>>(
    selected: &[S],
    ingredients_string: &str,
    name_on_order: &str,
    order_filled: bool,
    limits: OrderLimits,
) -> Result<OrderDraft, OrderValidationError> {
    if selected.iter().all(|s| s.as_ref().trim().is_empty()) {
        return Err(OrderValidationError::NoIngredients);
    }

    let ingredients_len = ingredients_string.chars().count();
    if ingredients_len > limits.max_ingredients_len {
        return Err(OrderValidationError::IngredientsTooLong {
            max: limits.max_ingredients_len,
            actual: ingredients_len,
        });
    }

    let name = name_on_order.trim();
    if name.is_empty() {
        return Err(OrderValidationError::MissingName);
    }

    let name_len = name.chars().count();
    if name_len > limits.max_name_len {
        return Err(OrderValidationError::NameTooLong {
            max: limits.max_name_len,
            actual: name_len,
        });
    }

    Ok(OrderDraft {
        name_on_order: name.to_string(),
        ingredients: ingredients_string.to_string(),
        order_filled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(
        selected: &[&str],
        ingredients: &str,
        name: &str,
    ) -> Result<OrderDraft, OrderValidationError> {
        validate_order(selected, ingredients, name, false, OrderLimits::default())
    }

    #[test]
    fn test_valid_order_trims_name() {
        let draft = check(&["Apple"], "Apple", "  Kevin  ").unwrap();
        assert_eq!(draft.name_on_order, "Kevin");
        assert_eq!(draft.ingredients, "Apple");
        assert!(!draft.order_filled);
    }

    #[test]
    fn test_no_ingredients_rejected_first() {
        // Blank name is also wrong, but the ingredient check comes first
        assert_eq!(check(&[], "", "   "), Err(OrderValidationError::NoIngredients));
    }

    #[test]
    fn test_blank_selections_are_no_ingredients() {
        assert_eq!(
            check(&["", "  "], " and   ", "Kevin"),
            Err(OrderValidationError::NoIngredients)
        );
        assert_eq!(
            OrderValidationError::NoIngredients.to_string(),
            "Please choose at least one ingredient."
        );
    }

    #[test]
    fn test_ingredients_length_boundary() {
        let exactly_200 = "a".repeat(200);
        assert!(check(&["a"], &exactly_200, "Kevin").is_ok());

        let over = "a".repeat(201);
        assert_eq!(
            check(&["a"], &over, "Kevin"),
            Err(OrderValidationError::IngredientsTooLong {
                max: 200,
                actual: 201
            })
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 200 two-byte characters
        let accented = "é".repeat(200);
        assert!(check(&["é"], &accented, "Kevin").is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            check(&["Apple"], "Apple", " \t "),
            Err(OrderValidationError::MissingName)
        );
        assert_eq!(
            check(&["Apple"], "Apple", ""),
            Err(OrderValidationError::MissingName)
        );
    }

    #[test]
    fn test_name_length_boundary() {
        let name_100 = "n".repeat(100);
        assert!(check(&["Apple"], "Apple", &name_100).is_ok());

        // surrounding whitespace does not count
        let padded = format!("  {}  ", name_100);
        assert!(check(&["Apple"], "Apple", &padded).is_ok());

        let name_101 = "n".repeat(101);
        assert_eq!(
            check(&["Apple"], "Apple", &name_101),
            Err(OrderValidationError::NameTooLong {
                max: 100,
                actual: 101
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            OrderValidationError::IngredientsTooLong {
                max: 200,
                actual: 250
            }
            .to_string(),
            "Ingredients exceed 200 characters."
        );
        assert_eq!(
            OrderValidationError::MissingName.to_string(),
            "Please provide a name for the smoothie."
        );
    }
}
