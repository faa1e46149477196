//! # Session Snapshot & Transition Function
//!
//! The single state value for one storefront session and the pure function
//! that replaces it.
//!
//! ## Transition Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot Transitions                                 │
//! │                                                                         │
//! │  Action                    Effect on the new snapshot                   │
//! │  ──────────────────────    ───────────────────────────────────────────  │
//! │  UPDATE_PRODUCTS       ──► products replaced wholesale                  │
//! │  ADD_TO_CART           ──► line appended, cart_open = true              │
//! │  ADD_MULTIPLE_TO_CART  ──► lines appended in order, drawer untouched    │
//! │  UPDATE_CART_QUANTITY  ──► matching line(s) requantified, drawer open   │
//! │  REMOVE_FROM_CART      ──► matching line(s) dropped,                    │
//! │                            cart_open = !cart.is_empty()                 │
//! │  CLEAR_CART            ──► cart emptied, drawer closed                  │
//! │  TOGGLE_CART           ──► drawer visibility negated                    │
//! │  UPDATE_CATEGORIES     ──► categories replaced wholesale                │
//! │  UPDATE_CURRENT_CATEGORY ► active category replaced                     │
//! │  (unknown)             ──► identity                                     │
//! │                                                                         │
//! │  Every transition duplicates the previous snapshot and mutates the      │
//! │  copy; the previous value is never touched, so external callers can     │
//! │  keep old snapshots around for history or rollback.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::action::StoreAction;
use crate::types::{CartLine, Category, Product};

// =============================================================================
// Snapshot
// =============================================================================

/// The complete in-memory state for one storefront session.
///
/// Created once at session start (see [`StoreState::initial`]), replaced on
/// every dispatched action, and discarded when the session ends. Nothing here
/// is persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoreState {
    /// Catalog products, replaced wholesale on refresh.
    pub products: Vec<Product>,

    /// Catalog categories, replaced wholesale.
    pub categories: Vec<Category>,

    /// Identifier of the active category; empty means "none selected".
    pub current_category: String,

    /// Cart lines in insertion order. Order is display order.
    pub cart: Vec<CartLine>,

    /// Whether the cart drawer is visible.
    pub cart_open: bool,
}

impl StoreState {
    /// The fixed initial snapshot: empty catalog, empty cart, drawer closed.
    pub fn initial() -> Self {
        Self::default()
    }
}

// =============================================================================
// Transition Function
// =============================================================================

/// Computes the next snapshot from the previous one and an action.
///
/// If `previous` is absent, the fixed initial snapshot is substituted before
/// the action is applied. The function is total: it performs no I/O, never
/// fails, and never panics; [`StoreAction::Unknown`] (and only it) takes the
/// identity transition.
///
/// ## Duplicate Identifiers
/// Appending a line whose `_id` is already in the cart is not rejected; it
/// produces two lines with the same identifier. Quantity updates and removals
/// then address **every** line carrying the identifier.
pub fn transition(previous: Option<&StoreState>, action: &StoreAction) -> StoreState {
    let mut next = previous.cloned().unwrap_or_default();

    match action {
        StoreAction::UpdateProducts { products } => {
            next.products = products.clone();
        }

        StoreAction::AddToCart { product } => {
            next.cart_open = true;
            next.cart.push(product.clone());
        }

        StoreAction::AddMultipleToCart { products } => {
            next.cart.extend(products.iter().cloned());
        }

        StoreAction::UpdateCartQuantity {
            id,
            purchase_quantity,
        } => {
            next.cart_open = true;
            for line in next.cart.iter_mut().filter(|l| l.product.id == *id) {
                line.purchase_quantity = *purchase_quantity;
            }
        }

        StoreAction::RemoveFromCart { id } => {
            next.cart.retain(|l| l.product.id != *id);
            next.cart_open = !next.cart.is_empty();
        }

        StoreAction::ClearCart => {
            next.cart.clear();
            next.cart_open = false;
        }

        StoreAction::ToggleCart => {
            next.cart_open = !next.cart_open;
        }

        StoreAction::UpdateCategories { categories } => {
            next.categories = categories.clone();
        }

        StoreAction::UpdateCurrentCategory { current_category } => {
            next.current_category = current_category.clone();
        }

        // Fallback arm: anything outside the enumerated set leaves the
        // snapshot unchanged.
        StoreAction::Unknown => {}
    }

    next
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: format!("Description of {}", id),
            image: format!("{}.jpg", id),
            price_cents: 499,
            quantity: 20,
            category: "cat-1".to_string(),
        }
    }

    fn line(id: &str, purchase_quantity: u32) -> CartLine {
        product(id).into_cart_line(purchase_quantity)
    }

    /// A snapshot with every field populated, so identity checks are
    /// meaningful.
    fn populated_state() -> StoreState {
        StoreState {
            products: vec![product("a"), product("b")],
            categories: vec![Category {
                id: "cat-1".to_string(),
                name: "Food".to_string(),
            }],
            current_category: "cat-1".to_string(),
            cart: vec![line("a", 1)],
            cart_open: true,
        }
    }

    #[test]
    fn test_unknown_action_is_identity() {
        let state = populated_state();
        assert_eq!(transition(Some(&state), &StoreAction::Unknown), state);
    }

    #[test]
    fn test_absent_previous_behaves_as_initial_state() {
        let action = StoreAction::AddToCart {
            product: line("a", 2),
        };

        let from_none = transition(None, &action);
        let from_initial = transition(Some(&StoreState::initial()), &action);

        assert_eq!(from_none, from_initial);
        assert_eq!(from_none.cart.len(), 1);
        assert!(from_none.cart_open);
    }

    #[test]
    fn test_previous_snapshot_is_never_mutated() {
        let state = populated_state();
        let before = state.clone();

        let _ = transition(Some(&state), &StoreAction::ClearCart);
        let _ = transition(Some(&state), &StoreAction::RemoveFromCart {
            id: "a".to_string(),
        });

        assert_eq!(state, before);
    }

    #[test]
    fn test_update_products_replaces_wholesale() {
        let state = populated_state();
        let next = transition(Some(&state), &StoreAction::UpdateProducts {
            products: vec![product("z")],
        });

        assert_eq!(next.products, vec![product("z")]);

        // Everything else passes through unchanged
        assert_eq!(next.categories, state.categories);
        assert_eq!(next.current_category, state.current_category);
        assert_eq!(next.cart, state.cart);
        assert_eq!(next.cart_open, state.cart_open);
    }

    #[test]
    fn test_add_to_cart_appends_and_opens_drawer() {
        let mut state = populated_state();
        state.cart_open = false;

        let next = transition(Some(&state), &StoreAction::AddToCart {
            product: line("b", 1),
        });

        assert!(next.cart_open);
        assert_eq!(next.cart.len(), 2);
        assert_eq!(next.cart[1], line("b", 1));
    }

    #[test]
    fn test_add_to_cart_does_not_deduplicate() {
        let state = populated_state();
        let next = transition(Some(&state), &StoreAction::AddToCart {
            product: line("a", 5),
        });

        // Two lines now carry the same identifier
        assert_eq!(next.cart.len(), 2);
        assert_eq!(next.cart[0].id(), "a");
        assert_eq!(next.cart[1].id(), "a");
    }

    #[test]
    fn test_add_multiple_preserves_order_and_drawer() {
        let mut state = populated_state();
        state.cart_open = false;

        let next = transition(Some(&state), &StoreAction::AddMultipleToCart {
            products: vec![line("p1", 1), line("p2", 2)],
        });

        let expected: Vec<CartLine> = state
            .cart
            .iter()
            .cloned()
            .chain([line("p1", 1), line("p2", 2)])
            .collect();
        assert_eq!(next.cart, expected);

        // Drawer visibility is left alone
        assert!(!next.cart_open);
    }

    #[test]
    fn test_update_quantity_targets_only_matching_line() {
        let mut state = populated_state();
        state.cart = vec![line("a", 1), line("b", 4)];

        let next = transition(Some(&state), &StoreAction::UpdateCartQuantity {
            id: "a".to_string(),
            purchase_quantity: 7,
        });

        assert_eq!(next.cart[0].purchase_quantity, 7);
        assert_eq!(next.cart[1], line("b", 4));
        assert!(next.cart_open);
    }

    #[test]
    fn test_update_quantity_addresses_every_duplicate() {
        let mut state = populated_state();
        state.cart = vec![line("a", 1), line("b", 2), line("a", 3)];

        let next = transition(Some(&state), &StoreAction::UpdateCartQuantity {
            id: "a".to_string(),
            purchase_quantity: 9,
        });

        assert_eq!(next.cart[0].purchase_quantity, 9);
        assert_eq!(next.cart[1].purchase_quantity, 2);
        assert_eq!(next.cart[2].purchase_quantity, 9);
    }

    #[test]
    fn test_update_quantity_without_match_leaves_cart_unchanged() {
        let state = populated_state();
        let next = transition(Some(&state), &StoreAction::UpdateCartQuantity {
            id: "missing".to_string(),
            purchase_quantity: 3,
        });

        assert_eq!(next.cart, state.cart);
        assert!(next.cart_open);
    }

    #[test]
    fn test_removal_recomputes_drawer_visibility() {
        let mut state = populated_state();
        state.cart = vec![line("a", 1), line("b", 1)];

        let after_a = transition(Some(&state), &StoreAction::RemoveFromCart {
            id: "a".to_string(),
        });
        assert_eq!(after_a.cart, vec![line("b", 1)]);
        assert!(after_a.cart_open);

        let after_b = transition(Some(&after_a), &StoreAction::RemoveFromCart {
            id: "b".to_string(),
        });
        assert!(after_b.cart.is_empty());
        assert!(!after_b.cart_open);
    }

    #[test]
    fn test_clear_cart_resets_exactly_two_fields() {
        let state = populated_state();
        let next = transition(Some(&state), &StoreAction::ClearCart);

        let expected = StoreState {
            cart: Vec::new(),
            cart_open: false,
            ..state
        };
        assert_eq!(next, expected);
    }

    #[test]
    fn test_toggle_cart_is_self_inverse() {
        let state = populated_state();

        let once = transition(Some(&state), &StoreAction::ToggleCart);
        let twice = transition(Some(&once), &StoreAction::ToggleCart);

        assert_eq!(once.cart_open, !state.cart_open);
        assert_eq!(twice.cart_open, state.cart_open);
    }

    #[test]
    fn test_update_categories_and_current_category() {
        let state = populated_state();

        let categories = vec![Category {
            id: "cat-2".to_string(),
            name: "Toys".to_string(),
        }];
        let next = transition(Some(&state), &StoreAction::UpdateCategories {
            categories: categories.clone(),
        });
        assert_eq!(next.categories, categories);

        let next = transition(Some(&next), &StoreAction::UpdateCurrentCategory {
            current_category: "cat-2".to_string(),
        });
        assert_eq!(next.current_category, "cat-2");
    }
}
