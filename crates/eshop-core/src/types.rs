//! # Domain Types
//!
//! Core domain types for the storefront session state.
//!
//! ## Identity
//! Every entity is keyed by `_id`, an opaque unique identifier provided
//! externally (a document-store ObjectId in practice). This crate never
//! generates identifiers; it only carries them.
//!
//! ## Wire Shape
//! All types serialize in the camelCase document shape the storefront and the
//! catalog collections share, with the identity field spelled `_id`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product
// =============================================================================

/// A catalog product as displayed by the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Opaque unique identifier, provided externally.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name shown in the catalog and the cart.
    pub name: String,

    /// Longer description for the product detail view.
    pub description: String,

    /// Image file name rendered by the storefront.
    pub image: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Units on hand.
    pub quantity: i64,

    /// Identifier of the category this product belongs to.
    pub category: String,
}

impl Product {
    /// Turns this product into a cart line with the given purchase quantity.
    ///
    /// The product data is carried into the line as-is; later catalog
    /// refreshes do not touch lines already in the cart.
    pub fn into_cart_line(self, purchase_quantity: u32) -> CartLine {
        CartLine {
            product: self,
            purchase_quantity,
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A catalog category used to filter the product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    /// Opaque unique identifier, provided externally.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name of the category.
    pub name: String,
}

// =============================================================================
// Cart Line
// =============================================================================

/// A product in the cart together with the requested purchase quantity.
///
/// ## Identity
/// The line inherits the product's `_id`. Cart entries are expected to be
/// unique by `_id` at the semantic level assumed by quantity updates and
/// removals, though the transition function does not enforce uniqueness on
/// insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// The product data carried into the cart when the line was added.
    #[serde(flatten)]
    pub product: Product,

    /// Requested purchase quantity (positive).
    pub purchase_quantity: u32,
}

impl CartLine {
    /// Returns the identity key of this line.
    #[inline]
    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Line total in cents (unit price × purchase quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.product.price_cents * i64::from(self.purchase_quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
