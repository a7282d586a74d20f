//! # Cashier Repository
//!
//! `get_with_orders` loads the deepest graph a cashier has:
//!
//! ```text
//! Cashier
//!   └── orders[]            (cashier not repeated)
//!         └── lines[]
//!               └── product (category not loaded)
//! ```

use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::repository::order::OrderRepository;
use cornerstore_core::{Cashier, CashierGraph, NewCashier, OrderGraph, OrderLineGraph};

/// Repository for cashier database operations.
#[derive(Debug, Clone)]
pub struct CashierRepository {
    pool: SqlitePool,
}

impl CashierRepository {
    /// Creates a new CashierRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CashierRepository { pool }
    }

    /// Lists all cashiers, shallow, ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Cashier>> {
        let cashiers = sqlx::query_as::<_, Cashier>(
            "SELECT id, first_name, last_name FROM cashiers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cashiers)
    }

    /// Gets a cashier by its ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Cashier>> {
        let cashier = sqlx::query_as::<_, Cashier>(
            "SELECT id, first_name, last_name FROM cashiers WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cashier)
    }

    /// Gets a cashier with orders, their lines and each line's product.
    ///
    /// ## Returns
    /// * `Ok(Some(CashierGraph))` - Cashier found (orders may be empty)
    /// * `Ok(None)` - Cashier not found
    pub async fn get_with_orders(&self, id: i64) -> DbResult<Option<CashierGraph>> {
        let Some(cashier) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let order_repo = OrderRepository::new(self.pool.clone());
        let orders = order_repo.list_by_cashier(id).await?;

        let mut lines_by_order: HashMap<i64, Vec<OrderLineGraph>> = HashMap::new();
        for line in order_repo.lines_by_cashier(id).await? {
            lines_by_order
                .entry(line.line.order_id)
                .or_default()
                .push(line);
        }

        let orders: Vec<OrderGraph> = orders
            .into_iter()
            .map(|order| {
                let lines = lines_by_order.remove(&order.id).unwrap_or_default();
                OrderGraph {
                    order,
                    cashier: None,
                    lines: Some(lines),
                }
            })
            .collect();

        debug!(id, orders = orders.len(), "Loaded cashier graph");

        Ok(Some(CashierGraph {
            cashier,
            orders: Some(orders),
        }))
    }

    /// Inserts a new cashier; the store assigns the id.
    pub async fn insert(&self, cashier: &NewCashier) -> DbResult<Cashier> {
        debug!(first_name = %cashier.first_name, "Inserting cashier");

        let id = sqlx::query("INSERT INTO cashiers (first_name, last_name) VALUES (?1, ?2)")
            .bind(&cashier.first_name)
            .bind(&cashier.last_name)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Cashier {
            id,
            first_name: cashier.first_name.clone(),
            last_name: cashier.last_name.clone(),
        })
    }
}
