//! Category repository.
//!
//! Same shape as the product repository, over the much smaller category
//! collection the storefront's filter bar is built from.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;
use tracing::debug;

use eshop_core::Category;

use crate::error::{DbError, DbResult};

/// Collection the category documents live in.
pub const COLLECTION: &str = "categories";

/// Repository for category database operations.
#[derive(Clone)]
pub struct CategoryRepository {
    collection: Collection<Category>,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository over the given collection.
    pub fn new(collection: Collection<Category>) -> Self {
        CategoryRepository { collection }
    }

    /// Lists every category, sorted by name.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        debug!("Listing categories");

        let cursor = self.collection.find(doc! {}).sort(doc! { "name": 1 }).await?;
        cursor.try_collect().await.map_err(DbError::from)
    }

    /// Looks up a category by identifier.
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<Category>> {
        let category = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(category)
    }

    /// Inserts a batch of categories. Returns the number inserted.
    pub async fn insert_many(&self, categories: &[Category]) -> DbResult<usize> {
        if categories.is_empty() {
            return Ok(0);
        }

        debug!(count = categories.len(), "Inserting categories");

        let result = self.collection.insert_many(categories).await?;
        Ok(result.inserted_ids.len())
    }

    /// Counts the categories.
    pub async fn count(&self) -> DbResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    /// Removes every category. Returns the number removed.
    pub async fn clear(&self) -> DbResult<u64> {
        debug!("Clearing categories");

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

    /// Requires a running MongoDB at MONGODB_URI (or localhost).
    #[tokio::test]
    #[ignore]
    async fn test_category_round_trip() {
        let connection = Connection::connect(DbConfig::from_env()).await.unwrap();
        let repo = CategoryRepository::new(connection.collection("categories_repo_test"));

        repo.clear().await.unwrap();
        repo.insert_many(&[
            Category {
                id: "cat-1".to_string(),
                name: "Food".to_string(),
            },
            Category {
                id: "cat-2".to_string(),
                name: "Toys".to_string(),
            },
        ])
        .await
        .unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        // Sorted by name
        assert_eq!(listed[0].name, "Food");

        assert!(repo.find_by_id("cat-2").await.unwrap().is_some());
        repo.clear().await.unwrap();
    }
}
