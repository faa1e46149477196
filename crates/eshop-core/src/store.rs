//! # Store
//!
//! Owns the current snapshot for one session and applies actions to it
//! sequentially.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Dispatch                                     │
//! │                                                                         │
//! │  UI event ──► StoreAction ──► Store::dispatch ──► transition(prev, a)   │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                          snapshot replaced wholesale                    │
//! │                          (previous value dropped here,                  │
//! │                           but callers may have kept clones)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dispatch is synchronous and one action at a time; there is no suspension
//! point between reading the previous snapshot and installing the new one.

use std::sync::{Arc, Mutex};

use crate::action::StoreAction;
use crate::state::{transition, StoreState};

// =============================================================================
// Store
// =============================================================================

/// Holds the authoritative snapshot for a single session.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: StoreState,
}

impl Store {
    /// Creates a store holding the fixed initial snapshot.
    pub fn new() -> Self {
        Store {
            state: StoreState::initial(),
        }
    }

    /// Creates a store holding a pre-existing snapshot (e.g. restored by an
    /// external caller).
    pub fn with_state(state: StoreState) -> Self {
        Store { state }
    }

    /// Returns the current snapshot.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Applies one action, replacing the current snapshot with the result of
    /// the transition function. Returns the new snapshot.
    pub fn dispatch(&mut self, action: &StoreAction) -> &StoreState {
        self.state = transition(Some(&self.state), action);
        &self.state
    }
}

// =============================================================================
// Session State
// =============================================================================

/// Thread-shareable wrapper around a [`Store`].
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Store>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one caller dispatches at a time, keeping the
///   one-action-at-a-time contract when handlers run on different threads
#[derive(Debug, Clone)]
pub struct SessionState {
    store: Arc<Mutex<Store>>,
}

impl SessionState {
    /// Creates a session holding the fixed initial snapshot.
    pub fn new() -> Self {
        SessionState {
            store: Arc::new(Mutex::new(Store::new())),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let open = session.with_store(|store| store.state().cart_open);
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_store_mut(|store| {
    ///     store.dispatch(&StoreAction::ToggleCart);
    /// });
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn cart_line(id: &str) -> crate::types::CartLine {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: String::new(),
            image: "placeholder.jpg".to_string(),
            price_cents: 199,
            quantity: 5,
            category: "cat-1".to_string(),
        }
        .into_cart_line(1)
    }

    #[test]
    fn test_store_starts_at_initial_state() {
        let store = Store::new();
        assert_eq!(store.state(), &StoreState::initial());
    }

    #[test]
    fn test_store_accepts_a_restored_snapshot() {
        let mut snapshot = StoreState::initial();
        snapshot.cart.push(cart_line("a"));
        snapshot.cart_open = true;

        let store = Store::with_state(snapshot.clone());
        assert_eq!(store.state(), &snapshot);
    }

    #[test]
    fn test_dispatch_replaces_snapshot() {
        let mut store = Store::new();

        store.dispatch(&StoreAction::AddToCart {
            product: cart_line("a"),
        });
        store.dispatch(&StoreAction::ToggleCart);

        assert_eq!(store.state().cart.len(), 1);
        assert!(!store.state().cart_open);
    }

    #[test]
    fn test_session_state_serializes_dispatch() {
        let session = SessionState::new();

        session.with_store_mut(|store| {
            store.dispatch(&StoreAction::AddToCart {
                product: cart_line("a"),
            });
        });

        let open = session.with_store(|store| store.state().cart_open);
        assert!(open);
    }
}
