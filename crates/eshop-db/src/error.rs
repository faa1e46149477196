//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Driver error (mongodb::error::Error)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Server/API layer (out of scope here) maps to user-facing failures      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Connection refusal, authentication failure, and the like are entirely the
//! driver's to detect; this module only sorts them into coarse categories.

use mongodb::error::ErrorKind;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The connection string could not be parsed.
    #[error("invalid connection string: {0}")]
    InvalidUri(String),

    /// The server could not be reached or refused the connection.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// A document was expected but is not there.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The server rejected or failed a command.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Anything the categories above don't cover.
    #[error("internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Convert driver errors to DbError.
///
/// ## Error Mapping
/// ```text
/// ErrorKind::InvalidArgument   → DbError::InvalidUri
/// ErrorKind::ServerSelection   → DbError::ConnectionFailed
/// ErrorKind::Authentication    → DbError::ConnectionFailed
/// ErrorKind::Io                → DbError::ConnectionFailed
/// ErrorKind::Command           → DbError::QueryFailed
/// Other                        → DbError::Internal
/// ```
impl From<mongodb::error::Error> for DbError {
    fn from(err: mongodb::error::Error) -> Self {
        match *err.kind {
            ErrorKind::InvalidArgument { ref message, .. } => DbError::InvalidUri(message.clone()),

            ErrorKind::ServerSelection { ref message, .. } => {
                DbError::ConnectionFailed(message.clone())
            }

            ErrorKind::Authentication { ref message, .. } => {
                DbError::ConnectionFailed(message.clone())
            }

            ErrorKind::Io(ref io_err) => DbError::ConnectionFailed(io_err.to_string()),

            ErrorKind::Command(ref cmd_err) => DbError::QueryFailed(cmd_err.message.clone()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================
