//! # Store Actions
//!
//! The closed set of actions the dispatch layer can request against a session
//! snapshot, plus the JSON envelope they travel in.
//!
//! ## Wire Envelope
//! Actions arrive as tagged records discriminated by a `type` field, with a
//! kind-specific payload alongside the tag:
//!
//! ```json
//! { "type": "UPDATE_CART_QUANTITY", "_id": "abc123", "purchaseQuantity": 3 }
//! ```
//!
//! Discriminants not in the enumerated set decode to [`StoreAction::Unknown`],
//! which takes the identity transition. This keeps decoding total for any
//! well-formed envelope and preserves the "never fails" contract of the
//! transition function.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ActionError;
use crate::types::{CartLine, Category, Product};

// =============================================================================
// Action
// =============================================================================

/// One requested state change, tagged by kind.
///
/// The discriminant values are produced by the external dispatch layer and
/// are part of the wire contract; the variant payloads mirror the envelope
/// fields exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum StoreAction {
    /// Replace the product list wholesale.
    UpdateProducts { products: Vec<Product> },

    /// Append one line to the cart and open the cart drawer.
    AddToCart { product: CartLine },

    /// Append several lines to the cart, preserving their relative order.
    /// Does not touch the drawer visibility.
    AddMultipleToCart { products: Vec<CartLine> },

    /// Set the purchase quantity of the cart line(s) with the given id
    /// and open the cart drawer.
    UpdateCartQuantity {
        #[serde(rename = "_id")]
        id: String,
        #[serde(rename = "purchaseQuantity")]
        purchase_quantity: u32,
    },

    /// Drop the cart line(s) with the given id.
    RemoveFromCart {
        #[serde(rename = "_id")]
        id: String,
    },

    /// Empty the cart and close the drawer.
    ClearCart,

    /// Flip the cart drawer visibility.
    ToggleCart,

    /// Replace the category list wholesale.
    UpdateCategories { categories: Vec<Category> },

    /// Select the active category (empty id means "none selected").
    UpdateCurrentCategory {
        #[serde(rename = "currentCategory")]
        current_category: String,
    },

    /// Any discriminant outside the enumerated set. Identity transition.
    #[serde(other)]
    Unknown,
}

impl StoreAction {
    /// Decodes an action from its JSON envelope.
    ///
    /// Unrecognized `type` discriminants decode to [`StoreAction::Unknown`];
    /// a structurally malformed envelope is the only error case.
    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        serde_json::from_str(json).map_err(ActionError::Decode)
    }

    /// Encodes this action into its JSON envelope.
    pub fn to_json(&self) -> Result<String, ActionError> {
        serde_json::to_string(self).map_err(ActionError::Encode)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
