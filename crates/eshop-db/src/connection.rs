//! # Connection Bootstrap
//!
//! The process-wide MongoDB connection handle.
//!
//! One `Connection` is constructed by the startup routine and passed by
//! reference to whatever server components need it; nothing in this crate
//! stashes it in a global. The driver manages its own pool behind the handle,
//! so cloning `Connection` is cheap and everything is safe to share across
//! tasks.
//!
//! Connection establishment is lazy (the driver's default): constructing the
//! handle validates the connection string but does not reach the server.
//! Use [`Connection::health_check`] when startup should fail fast.

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

use crate::config::{DbConfig, DEFAULT_DATABASE_NAME};
use crate::error::DbResult;
use crate::repository::category::CategoryRepository;
use crate::repository::product::ProductRepository;
use crate::repository::{category, product};

/// Main database handle providing collection and repository access.
#[derive(Clone, Debug)]
pub struct Connection {
    /// The driver client (owns the connection pool).
    client: Client,

    /// The database named by the connection string path, or `e-shop` when
    /// the path is absent.
    database: Database,
}

impl Connection {
    /// Creates the connection handle from a configuration.
    ///
    /// ## What This Does
    /// 1. Parses the connection string (the only failure surface here)
    /// 2. Applies the app name and server selection timeout
    /// 3. Resolves the target database from the URI path
    ///
    /// No I/O happens yet; the driver dials the server on first use.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let connection = Connection::connect(DbConfig::from_env()).await?;
    /// ```
    pub async fn connect(config: DbConfig) -> DbResult<Self> {
        info!(uri = %config.uri, "Initializing database connection");

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some(config.app_name.clone());
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let client = Client::with_options(options)?;

        // mongodb://localhost/e-shop names the database in the URI path;
        // fall back to the conventional name when the path is absent
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE_NAME));

        debug!(database = database.name(), "Database handle resolved");

        Ok(Connection { client, database })
    }

    /// Returns the underlying driver client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns the target database handle.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Returns the name of the target database.
    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// Returns a typed handle to an arbitrary collection.
    ///
    /// Prefer the repository accessors for the catalog collections.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let products = connection.products().list().await?;
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.database.collection(product::COLLECTION))
    }

    /// Returns the category repository.
    pub fn categories(&self) -> CategoryRepository {
        CategoryRepository::new(self.database.collection(category::COLLECTION))
    }

    /// Checks if the database is reachable (can answer a ping).
    ///
    /// ## Returns
    /// * `true` - Server answered
    /// * `false` - Server unreachable or refused
    pub async fn health_check(&self) -> bool {
        self.database.run_command(doc! { "ping": 1 }).await.is_ok()
    }

    /// Shuts down the driver, draining its pool.
    ///
    /// ## When To Call
    /// On process shutdown, from the routine that owns the handle. All
    /// clones of this connection stop working afterwards.
    pub async fn shutdown(self) {
        info!("Closing database connection");
        self.client.shutdown().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
