//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Query Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get_by_id             Product                   (bare row)            │
//! │  list_with_category    Vec<ProductGraph>         (category loaded)     │
//! │  search_with_category  Vec<ProductGraph>         (filtered)            │
//! │  list_by_category      Vec<Product>              (bare rows)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Search
//! The term is matched case-insensitively as a substring of the product
//! name OR its category name. SQLite's `LOWER()` only folds ASCII, so the
//! filter runs on the loaded graphs with Rust's Unicode-aware lowercasing.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use cornerstore_core::{Category, NewProduct, Product, ProductGraph};

/// A product row joined with its category.
#[derive(Debug, sqlx::FromRow)]
struct ProductCategoryRow {
    id: i64,
    product_name: String,
    price_cents: i64,
    brand: String,
    category_id: i64,
    category_name: String,
}

impl From<ProductCategoryRow> for ProductGraph {
    fn from(row: ProductCategoryRow) -> Self {
        ProductGraph {
            category: Some(Category {
                id: row.category_id,
                category_name: row.category_name,
            }),
            product: Product {
                id: row.id,
                product_name: row.product_name,
                price_cents: row.price_cents,
                brand: row.brand,
                category_id: row.category_id,
            },
        }
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let snacks = repo.search_with_category("snack").await?;
/// let product = repo.get_by_id(2).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product with its category loaded, ordered by id.
    pub async fn list_with_category(&self) -> DbResult<Vec<ProductGraph>> {
        debug!("Listing products with category");

        let rows = sqlx::query_as::<_, ProductCategoryRow>(
            r#"
            SELECT
                p.id,
                p.product_name,
                p.price_cents,
                p.brand,
                p.category_id,
                c.category_name
            FROM products p
            INNER JOIN categories c ON c.id = p.category_id
            ORDER BY p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductGraph::from).collect())
    }

    /// Products whose name or category name contains `term`, ignoring case.
    ///
    /// A blank term (empty or whitespace only) applies no filter.
    ///
    /// ## Example
    /// ```rust,ignore
    /// // "SNACK" matches Chips through its Snacks category
    /// let products = repo.search_with_category("SNACK").await?;
    /// ```
    pub async fn search_with_category(&self, term: &str) -> DbResult<Vec<ProductGraph>> {
        let term = term.trim();
        let products = self.list_with_category().await?;

        if term.is_empty() {
            return Ok(products);
        }

        let needle = term.to_lowercase();
        let matches: Vec<ProductGraph> = products
            .into_iter()
            .filter(|p| p.matches(&needle))
            .collect();

        debug!(term = %term, count = matches.len(), "Product search");
        Ok(matches)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, product_name, price_cents, brand, category_id
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Products belonging to one category, ordered by id.
    pub async fn list_by_category(&self, category_id: i64) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, product_name, price_cents, brand, category_id
            FROM products
            WHERE category_id = ?1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Inserts a new product; the store assigns the id.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Inserted row
    /// * `Err(DbError::ForeignKeyViolation)` - `category_id` doesn't exist
    pub async fn insert(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(name = %product.product_name, "Inserting product");

        let id = sqlx::query(
            r#"
            INSERT INTO products (product_name, price_cents, brand, category_id)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&product.product_name)
        .bind(product.price.cents())
        .bind(&product.brand)
        .bind(product.category_id)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(Product {
            id,
            product_name: product.product_name.clone(),
            price_cents: product.price.cents(),
            brand: product.brand.clone(),
            category_id: product.category_id,
        })
    }

    /// Overwrites name, price, brand and category of an existing product.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    /// * `Err(DbError::ForeignKeyViolation)` - `category_id` doesn't exist
    pub async fn update(&self, id: i64, product: &NewProduct) -> DbResult<()> {
        debug!(id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                product_name = ?2,
                price_cents = ?3,
                brand = ?4,
                category_id = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.product_name)
        .bind(product.price.cents())
        .bind(&product.brand)
        .bind(product.category_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }
}
