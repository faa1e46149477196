//! # eshop-db: Database Layer for e-shop
//!
//! This crate provides database access for the e-shop storefront backend.
//! It wraps the official MongoDB driver and exposes a ready-to-use connection
//! handle plus typed catalog repositories.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        e-shop Data Flow                                 │
//! │                                                                         │
//! │  Server startup routine                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::from_env() ← MONGODB_URI or mongodb://localhost/e-shop       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Connection::connect(config).await ← one handle for the process         │
//! │       │                                                                 │
//! │       ├──► connection.products()   ← catalog reads/seeding              │
//! │       └──► connection.categories()                                      │
//! │                                                                         │
//! │  Pooling, reconnection, and retry are the driver's defaults; this       │
//! │  crate adds no policy of its own.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Connection string configuration (env override + default)
//! - [`connection`] - The process-wide connection handle
//! - [`error`] - Database error types
//! - [`repository`] - Catalog repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use eshop_db::{Connection, DbConfig};
//!
//! // In the startup routine, once per process
//! let connection = Connection::connect(DbConfig::from_env()).await?;
//!
//! // Pass &connection to whatever server components need it
//! let products = connection.products().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod connection;
pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::DbConfig;
pub use connection::Connection;
pub use error::{DbError, DbResult};

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::product::ProductRepository;
