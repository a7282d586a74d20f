//! # Order Repository
//!
//! Database operations for orders and their lines.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. CREATE                                                             │
//! │     └── insert() → Order                                               │
//! │                                                                         │
//! │  2. ADD LINES (one statement each, no wrapping transaction)            │
//! │     └── add_line() → OrderLine                                         │
//! │     └── add_line() → OrderLine                                         │
//! │                                                                         │
//! │  3. RE-READ                                                            │
//! │     └── get_with_lines() → OrderGraph (cashier, lines, products,       │
//! │                                        categories)                     │
//! │                                                                         │
//! │  4. (OPTIONAL) DELETE                                                  │
//! │     └── delete() → lines go with it (ON DELETE CASCADE)                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::cashier::CashierRepository;
use cornerstore_core::{
    Category, NewOrder, NewOrderLine, Order, OrderGraph, OrderLine, OrderLineGraph, Product,
    ProductGraph,
};

/// An order line joined with its product and, when selected, the product's
/// category.
#[derive(Debug, sqlx::FromRow)]
struct LineProductRow {
    id: i64,
    order_id: i64,
    product_id: i64,
    quantity: i64,
    product_name: String,
    price_cents: i64,
    brand: String,
    category_id: i64,
    category_name: Option<String>,
}

impl From<LineProductRow> for OrderLineGraph {
    fn from(row: LineProductRow) -> Self {
        let category = row.category_name.map(|category_name| Category {
            id: row.category_id,
            category_name,
        });

        OrderLineGraph {
            line: OrderLine {
                id: row.id,
                order_id: row.order_id,
                product_id: row.product_id,
                quantity: row.quantity,
            },
            product: Some(ProductGraph {
                product: Product {
                    id: row.product_id,
                    product_name: row.product_name,
                    price_cents: row.price_cents,
                    brand: row.brand,
                    category_id: row.category_id,
                },
                category,
            }),
        }
    }
}

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Lists all orders, shallow, ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, cashier_id, paid_on_date FROM orders ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Orders paid in the half-open range `[start, end)`, shallow.
    ///
    /// Unpaid orders never match.
    ///
    /// ```rust,ignore
    /// let (start, end) = date::day_bounds(day)?;
    /// let orders = repo.list_paid_between(start, end).await?;
    /// ```
    pub async fn list_paid_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> DbResult<Vec<Order>> {
        debug!(%start, %end, "Listing orders in range");

        // Stored as 'YYYY-MM-DD HH:MM:SS[.f]', so text order is time order
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, cashier_id, paid_on_date
            FROM orders
            WHERE paid_on_date >= ?1 AND paid_on_date < ?2
            ORDER BY id
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Gets an order by its ID, nothing loaded around it.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT id, cashier_id, paid_on_date FROM orders WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Gets an order with its cashier, lines, each line's product and each
    /// product's category.
    ///
    /// ## Returns
    /// * `Ok(Some(OrderGraph))` - Order found
    /// * `Ok(None)` - Order not found
    pub async fn get_with_lines(&self, id: i64) -> DbResult<Option<OrderGraph>> {
        let Some(order) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let cashier = CashierRepository::new(self.pool.clone())
            .get_by_id(order.cashier_id)
            .await?;

        let rows = sqlx::query_as::<_, LineProductRow>(
            r#"
            SELECT
                ol.id,
                ol.order_id,
                ol.product_id,
                ol.quantity,
                p.product_name,
                p.price_cents,
                p.brand,
                p.category_id,
                c.category_name
            FROM order_lines ol
            INNER JOIN products p ON p.id = ol.product_id
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE ol.order_id = ?1
            ORDER BY ol.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        debug!(id, lines = rows.len(), "Loaded order graph");

        Ok(Some(OrderGraph {
            order,
            cashier,
            lines: Some(rows.into_iter().map(OrderLineGraph::from).collect()),
        }))
    }

    /// Lines (with products, without categories) of every order rung up by
    /// one cashier, ordered by order id then line id.
    pub(crate) async fn lines_by_cashier(&self, cashier_id: i64) -> DbResult<Vec<OrderLineGraph>> {
        let rows = sqlx::query_as::<_, LineProductRow>(
            r#"
            SELECT
                ol.id,
                ol.order_id,
                ol.product_id,
                ol.quantity,
                p.product_name,
                p.price_cents,
                p.brand,
                p.category_id,
                NULL AS category_name
            FROM order_lines ol
            INNER JOIN orders o ON o.id = ol.order_id
            INNER JOIN products p ON p.id = ol.product_id
            WHERE o.cashier_id = ?1
            ORDER BY ol.order_id, ol.id
            "#,
        )
        .bind(cashier_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderLineGraph::from).collect())
    }

    /// Orders of one cashier, shallow, ordered by id.
    pub async fn list_by_cashier(&self, cashier_id: i64) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, cashier_id, paid_on_date FROM orders WHERE cashier_id = ?1 ORDER BY id",
        )
        .bind(cashier_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Inserts a new order without lines; the store assigns the id.
    ///
    /// ## Returns
    /// * `Ok(Order)` - Inserted row
    /// * `Err(DbError::ForeignKeyViolation)` - `cashier_id` doesn't exist
    pub async fn insert(&self, order: &NewOrder) -> DbResult<Order> {
        debug!(cashier_id = order.cashier_id, "Inserting order");

        let id = sqlx::query("INSERT INTO orders (cashier_id, paid_on_date) VALUES (?1, ?2)")
            .bind(order.cashier_id)
            .bind(order.paid_on_date)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Order {
            id,
            cashier_id: order.cashier_id,
            paid_on_date: order.paid_on_date,
        })
    }

    /// Appends one line to an existing order.
    ///
    /// ## Returns
    /// * `Ok(OrderLine)` - Inserted row
    /// * `Err(DbError::ForeignKeyViolation)` - order or product doesn't exist
    pub async fn add_line(&self, order_id: i64, line: NewOrderLine) -> DbResult<OrderLine> {
        let id = sqlx::query(
            r#"
            INSERT INTO order_lines (order_id, product_id, quantity)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(order_id)
        .bind(line.product_id)
        .bind(line.quantity)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(OrderLine {
            id,
            order_id,
            product_id: line.product_id,
            quantity: line.quantity,
        })
    }

    /// Deletes an order. Its lines are removed by the cascade.
    ///
    /// ## Returns
    /// * `Ok(())` - Order removed
    /// * `Err(DbError::NotFound)` - Order doesn't exist
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting order");

        let result = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", id));
        }

        Ok(())
    }
}
