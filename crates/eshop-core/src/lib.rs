//! # eshop-core: Pure Session State for the e-shop Storefront
//!
//! This crate owns the authoritative in-memory representation of catalog,
//! category, and cart data for a single client session, and the transition
//! function that replaces it one action at a time.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        e-shop Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront UI (React)                          │   │
//! │  │    Catalog view ──► Category filter ──► Cart drawer             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch(action)                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ eshop-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │  action   │  │   state   │  │   store   │   │   │
//! │  │   │  Product  │  │StoreAction│  │StoreState │  │   Store   │   │   │
//! │  │   │ CartLine  │  │ envelopes │  │transition │  │ dispatch  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    eshop-db (Database Layer)                    │   │
//! │  │          MongoDB connection, catalog repositories, seed         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, CartLine)
//! - [`action`] - The tagged action union and its wire envelope
//! - [`state`] - The session snapshot and the transition function
//! - [`store`] - Snapshot ownership and sequential dispatch
//! - [`error`] - Decode and validation error types
//! - [`validation`] - Action-construction validation helpers
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `transition` depends only on its two inputs
//! 2. **No Mutation**: every transition produces a new snapshot; the previous
//!    value remains valid and unaffected
//! 3. **Total Function**: unrecognized actions take the identity transition;
//!    the transition never fails and never panics
//! 4. **Explicit Errors**: the only fallible surfaces (decode, validation)
//!    sit outside the transition and return typed errors
//!
//! ## Example Usage
//!
//! ```rust
//! use eshop_core::{transition, StoreAction, StoreState};
//!
//! let state = StoreState::initial();
//!
//! // Opening and closing the cart drawer is a pure round trip
//! let opened = transition(Some(&state), &StoreAction::ToggleCart);
//! let closed = transition(Some(&opened), &StoreAction::ToggleCart);
//!
//! assert!(opened.cart_open);
//! assert_eq!(closed.cart_open, state.cart_open);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action;
pub mod error;
pub mod state;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use eshop_core::StoreState` instead of
// `use eshop_core::state::StoreState`

pub use action::StoreAction;
pub use error::{ActionError, ValidationError};
pub use state::{transition, StoreState};
pub use store::{SessionState, Store};
pub use types::{CartLine, Category, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum purchase quantity accepted for a single cart line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Enforced by the validation helpers in the action-construction layer,
/// never by the transition function itself.
pub const MAX_PURCHASE_QUANTITY: u32 = 999;
