//! # Category Repository

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::repository::product::ProductRepository;
use cornerstore_core::{Category, CategoryGraph, NewCategory};

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Lists all categories, ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, category_name FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Gets a category by its ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, category_name FROM categories WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Gets a category with its products loaded.
    ///
    /// The products come back as bare rows; they never carry the category
    /// again.
    pub async fn get_with_products(&self, id: i64) -> DbResult<Option<CategoryGraph>> {
        let Some(category) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let products = ProductRepository::new(self.pool.clone())
            .list_by_category(id)
            .await?;

        Ok(Some(CategoryGraph {
            category,
            products: Some(products),
        }))
    }

    /// Inserts a new category; the store assigns the id.
    pub async fn insert(&self, category: &NewCategory) -> DbResult<Category> {
        debug!(name = %category.category_name, "Inserting category");

        let id = sqlx::query("INSERT INTO categories (category_name) VALUES (?1)")
            .bind(&category.category_name)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Category {
            id,
            category_name: category.category_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_list_seeded_categories() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let names: Vec<String> = db
            .categories()
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.category_name)
            .collect();

        assert_eq!(names, ["Beverages", "Snacks", "Household"]);
    }

    #[tokio::test]
    async fn test_get_with_products() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let graph = db.categories().get_with_products(1).await.unwrap().unwrap();

        assert_eq!(graph.category.category_name, "Beverages");
        let products = graph.products.unwrap();
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.category_id == 1));

        assert!(db.categories().get_with_products(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_then_empty_product_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let created = db
            .categories()
            .insert(&NewCategory {
                category_name: "Dairy".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, 4);
        let graph = db
            .categories()
            .get_with_products(created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(graph.products, Some(vec![]));
    }
}
