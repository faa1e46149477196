//! # Error Types
//!
//! Error types for eshop-core.
//!
//! The transition function itself recognizes no error conditions; the only
//! fallible surfaces in this crate sit at its edges:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where Errors Can Occur                               │
//! │                                                                         │
//! │  wire envelope ──decode──► StoreAction ──validate──► dispatch           │
//! │        │                        │                       │               │
//! │        ▼                        ▼                       ▼               │
//! │   ActionError            ValidationError          (infallible)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Action Error
// =============================================================================

/// Errors from encoding or decoding an action envelope.
///
/// Note that an unrecognized `type` discriminant is NOT an error; it decodes
/// to the unknown action and takes the identity transition.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The envelope is structurally malformed (missing tag, wrong field
    /// types, invalid JSON).
    #[error("malformed action envelope: {0}")]
    Decode(#[source] serde_json::Error),

    /// The action could not be serialized.
    #[error("action serialization failed: {0}")]
    Encode(#[source] serde_json::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Action-construction validation failures.
///
/// These occur when the dispatch layer builds an action from user input that
/// doesn't meet requirements. The transition function never produces them;
/// validation is strictly a pre-dispatch concern.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u32, max: u32 },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
