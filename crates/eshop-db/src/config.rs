//! Database configuration.
//!
//! The connection string comes from the `MONGODB_URI` environment variable
//! with a local-development fallback, matching how the storefront server is
//! deployed.

use std::env;
use std::time::Duration;

/// Default connection string for local development.
///
/// The URI path names the database, so the default handle lands on `e-shop`.
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost/e-shop";

/// Database name used when the connection string carries no path.
pub const DEFAULT_DATABASE_NAME: &str = "e-shop";

/// Environment variable that overrides the connection string.
pub const MONGODB_URI_ENV: &str = "MONGODB_URI";

/// Database configuration.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use eshop_db::DbConfig;
///
/// let config = DbConfig::new("mongodb://db.internal/e-shop")
///     .app_name("e-shop-api")
///     .server_selection_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// MongoDB connection string (may carry the database name in its path).
    pub uri: String,

    /// Application name reported to the server (shows up in server logs).
    pub app_name: String,

    /// How long the driver waits to find a usable server before an
    /// operation fails. Default: 30 seconds (the driver's own default).
    pub server_selection_timeout: Duration,
}

impl DbConfig {
    /// Creates a configuration with the given connection string.
    pub fn new(uri: impl Into<String>) -> Self {
        DbConfig {
            uri: uri.into(),
            app_name: "e-shop".to_string(),
            server_selection_timeout: Duration::from_secs(30),
        }
    }

    /// Loads the configuration from the environment.
    ///
    /// Reads `MONGODB_URI`, falling back to [`DEFAULT_MONGODB_URI`] when the
    /// variable is unset.
    pub fn from_env() -> Self {
        let uri =
            env::var(MONGODB_URI_ENV).unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string());
        DbConfig::new(uri)
    }

    /// Sets the application name reported to the server.
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Sets the server selection timeout.
    pub fn server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig::new(DEFAULT_MONGODB_URI)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
