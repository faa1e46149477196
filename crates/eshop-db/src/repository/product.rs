//! # Product Repository
//!
//! Database operations for the product catalog.
//!
//! ## Key Operations
//! - Listing (whole catalog or by category) for the storefront's
//!   UPDATE_PRODUCTS refreshes
//! - Lookup by identifier
//! - Bulk insert and clear for seeding

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;
use tracing::debug;

use eshop_core::Product;

use crate::error::{DbError, DbResult};

/// Collection the product documents live in.
pub const COLLECTION: &str = "products";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = connection.products();
///
/// // Whole catalog, sorted by name
/// let products = repo.list().await?;
///
/// // One category's slice of the catalog
/// let food = repo.list_by_category("64a1f0c2e4b0a93d5c8b4567").await?;
/// ```
#[derive(Clone)]
pub struct ProductRepository {
    collection: Collection<Product>,
}

impl ProductRepository {
    /// Creates a new ProductRepository over the given collection.
    pub fn new(collection: Collection<Product>) -> Self {
        ProductRepository { collection }
    }

    /// Lists the whole catalog, sorted by name.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        debug!("Listing products");

        let cursor = self.collection.find(doc! {}).sort(doc! { "name": 1 }).await?;
        cursor.try_collect().await.map_err(DbError::from)
    }

    /// Lists the products belonging to one category, sorted by name.
    pub async fn list_by_category(&self, category_id: &str) -> DbResult<Vec<Product>> {
        debug!(category = %category_id, "Listing products by category");

        let cursor = self
            .collection
            .find(doc! { "category": category_id })
            .sort(doc! { "name": 1 })
            .await?;
        cursor.try_collect().await.map_err(DbError::from)
    }

    /// Looks up a product by identifier.
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        debug!(id = %id, "Looking up product");

        let product = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(product)
    }

    /// Fetches a product by identifier, failing when it is not there.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Product> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Inserts a batch of products. Returns the number inserted.
    pub async fn insert_many(&self, products: &[Product]) -> DbResult<usize> {
        if products.is_empty() {
            return Ok(0);
        }

        debug!(count = products.len(), "Inserting products");

        let result = self.collection.insert_many(products).await?;
        Ok(result.inserted_ids.len())
    }

    /// Counts the products in the catalog.
    pub async fn count(&self) -> DbResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    /// Removes every product. Returns the number removed.
    pub async fn clear(&self) -> DbResult<u64> {
        debug!("Clearing products");

        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;
    use crate::connection::Connection;

    fn product(id: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: "A test product".to_string(),
            image: "placeholder.jpg".to_string(),
            price_cents: 499,
            quantity: 10,
            category: category.to_string(),
        }
    }

    /// Requires a running MongoDB at MONGODB_URI (or localhost).
    #[tokio::test]
    #[ignore]
    async fn test_insert_list_and_lookup_round_trip() {
        let connection = Connection::connect(
            DbConfig::from_env().app_name("eshop-db-tests"),
        )
        .await
        .unwrap();
        let repo = ProductRepository::new(connection.collection("products_repo_test"));

        repo.clear().await.unwrap();
        let inserted = repo
            .insert_many(&[product("p-1", "cat-a"), product("p-2", "cat-b")])
            .await
            .unwrap();
        assert_eq!(inserted, 2);

        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.list().await.unwrap().len(), 2);
        assert_eq!(repo.list_by_category("cat-a").await.unwrap().len(), 1);

        let found = repo.get_by_id("p-1").await.unwrap();
        assert_eq!(found.category, "cat-a");

        assert!(repo.find_by_id("missing").await.unwrap().is_none());
        assert!(matches!(
            repo.get_by_id("missing").await.unwrap_err(),
            DbError::NotFound { .. }
        ));

        repo.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_insert_many_with_empty_batch_is_a_no_op() {
        // No server needed: the empty batch short-circuits before any I/O
        let connection = Connection::connect(DbConfig::default()).await.unwrap();
        let repo = connection.products();

        assert_eq!(repo.insert_many(&[]).await.unwrap(), 0);
    }
}
