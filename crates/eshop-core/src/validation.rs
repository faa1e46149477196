//! # Validation Module
//!
//! Action-construction validation helpers.
//!
//! The transition function deliberately validates nothing: malformed payloads
//! pass through structurally and unknown actions are ignored. Whatever layer
//! constructs actions (form handlers, API adapters) is responsible for
//! rejecting bad input, and these helpers are that layer's toolbox.
//!
//! ## Usage
//! ```rust
//! use eshop_core::validation::{validate_entity_id, validate_purchase_quantity};
//!
//! validate_entity_id("64a1f0c2e4b0a93d5c8b4567").unwrap();
//! validate_purchase_quantity(5).unwrap();
//! ```

use crate::action::StoreAction;
use crate::error::{ValidationError, ValidationResult};
use crate::MAX_PURCHASE_QUANTITY;

/// Maximum accepted length for an entity identifier.
const MAX_ID_LENGTH: usize = 64;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an entity identifier (`_id`).
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 64 characters
///
/// Identifiers are otherwise opaque; no particular format is assumed.
pub fn validate_entity_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "_id".to_string(),
        });
    }

    if id.len() > MAX_ID_LENGTH {
        return Err(ValidationError::TooLong {
            field: "_id".to_string(),
            max: MAX_ID_LENGTH,
        });
    }

    Ok(())
}

/// Validates a purchase quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_PURCHASE_QUANTITY`]
pub fn validate_purchase_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "purchaseQuantity".to_string(),
        });
    }

    if quantity > MAX_PURCHASE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "purchaseQuantity".to_string(),
            min: 1,
            max: MAX_PURCHASE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a category selection.
///
/// An empty identifier is allowed here: it means "none selected".
pub fn validate_category_selection(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Ok(());
    }
    validate_entity_id(id)
}

// =============================================================================
// Action Validator
// =============================================================================

/// Validates a fully-constructed action before dispatch.
///
/// Checks the identifier and quantity rules for every payload the action
/// carries. Unit actions (clear, toggle) and the unknown fallback are always
/// valid.
pub fn validate_action(action: &StoreAction) -> ValidationResult<()> {
    match action {
        StoreAction::UpdateProducts { products } => {
            for product in products {
                validate_entity_id(&product.id)?;
            }
            Ok(())
        }

        StoreAction::AddToCart { product } => {
            validate_entity_id(product.id())?;
            validate_purchase_quantity(product.purchase_quantity)
        }

        StoreAction::AddMultipleToCart { products } => {
            for line in products {
                validate_entity_id(line.id())?;
                validate_purchase_quantity(line.purchase_quantity)?;
            }
            Ok(())
        }

        StoreAction::UpdateCartQuantity {
            id,
            purchase_quantity,
        } => {
            validate_entity_id(id)?;
            validate_purchase_quantity(*purchase_quantity)
        }

        StoreAction::RemoveFromCart { id } => validate_entity_id(id),

        StoreAction::UpdateCategories { categories } => {
            for category in categories {
                validate_entity_id(&category.id)?;
            }
            Ok(())
        }

        StoreAction::UpdateCurrentCategory { current_category } => {
            validate_category_selection(current_category)
        }

        StoreAction::ClearCart | StoreAction::ToggleCart | StoreAction::Unknown => Ok(()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    #[test]
    fn test_validate_entity_id() {
        assert!(validate_entity_id("64a1f0c2e4b0a93d5c8b4567").is_ok());
        assert!(validate_entity_id("p-1").is_ok());

        assert!(validate_entity_id("").is_err());
        assert!(validate_entity_id("   ").is_err());
        assert!(validate_entity_id(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_purchase_quantity() {
        assert!(validate_purchase_quantity(1).is_ok());
        assert!(validate_purchase_quantity(999).is_ok());

        assert!(validate_purchase_quantity(0).is_err());
        assert!(validate_purchase_quantity(1000).is_err());
    }

    #[test]
    fn test_empty_category_selection_means_none() {
        assert!(validate_category_selection("").is_ok());
        assert!(validate_category_selection("cat-1").is_ok());
        assert!(validate_category_selection(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_action_checks_payloads() {
        let good = Product {
            id: "p-1".to_string(),
            name: "Tin of Cookies".to_string(),
            description: String::new(),
            image: "cookie-tin.jpg".to_string(),
            price_cents: 299,
            quantity: 20,
            category: "cat-1".to_string(),
        };

        assert!(validate_action(&StoreAction::AddToCart {
            product: good.clone().into_cart_line(2),
        })
        .is_ok());

        // Zero quantity is rejected before dispatch
        assert!(validate_action(&StoreAction::AddToCart {
            product: good.clone().into_cart_line(0),
        })
        .is_err());

        // Empty identifier is rejected before dispatch
        let mut bad = good;
        bad.id = String::new();
        assert!(validate_action(&StoreAction::AddToCart {
            product: bad.into_cart_line(1),
        })
        .is_err());

        assert!(validate_action(&StoreAction::ToggleCart).is_ok());
        assert!(validate_action(&StoreAction::Unknown).is_ok());
    }
}
