//! # Seed Data
//!
//! The deterministic baseline written into an empty store: two cashiers,
//! three categories, four products, two orders and four order lines.
//! Tests use it as their fixture.
//!
//! ```text
//! Order 1  Ernie Fairchild  2025-05-20   Cola ×2, Chips ×1                = $4.00
//! Order 2  Lana Lopez       2025-05-21   Paper Towels ×1, Water Bottle ×3 = $5.75
//! ```
//!
//! Rows are inserted with explicit ids. SQLite hands out `max(id) + 1` for
//! later inserts, so new rows never collide with the fixture.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;

/// (id, first_name, last_name)
pub const CASHIERS: &[(i64, &str, &str)] = &[(1, "Ernie", "Fairchild"), (2, "Lana", "Lopez")];

/// (id, category_name)
pub const CATEGORIES: &[(i64, &str)] = &[(1, "Beverages"), (2, "Snacks"), (3, "Household")];

/// (id, product_name, price_cents, brand, category_id)
pub const PRODUCTS: &[(i64, &str, i64, &str, i64)] = &[
    (1, "Cola", 125, "FizzCo", 1),
    (2, "Chips", 150, "Crunchies", 2),
    (3, "Paper Towels", 275, "CleanUp", 3),
    (4, "Water Bottle", 100, "AquaPure", 1),
];

/// (id, cashier_id, (year, month, day) paid)
pub const ORDERS: &[(i64, i64, (i32, u32, u32))] = &[(1, 1, (2025, 5, 20)), (2, 2, (2025, 5, 21))];

/// (id, order_id, product_id, quantity)
pub const ORDER_LINES: &[(i64, i64, i64, i64)] = &[
    (1, 1, 1, 2), // 2x Cola
    (2, 1, 2, 1), // 1x Chips
    (3, 2, 3, 1), // 1x Paper Towels
    (4, 2, 4, 3), // 3x Water Bottle
];

/// Inserts the fixture if the store has no cashiers, categories or products.
///
/// ## Returns
/// * `Ok(true)` - Fixture inserted
/// * `Ok(false)` - Store already had data; nothing written
pub async fn seed_if_empty(pool: &SqlitePool) -> DbResult<bool> {
    let existing: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM cashiers)
              + (SELECT COUNT(*) FROM categories)
              + (SELECT COUNT(*) FROM products)",
    )
    .fetch_one(pool)
    .await?;

    if existing > 0 {
        debug!(existing, "Store already populated, skipping seed");
        return Ok(false);
    }

    // Parents before children so foreign keys hold at every step.
    for (id, first_name, last_name) in CASHIERS {
        sqlx::query("INSERT INTO cashiers (id, first_name, last_name) VALUES (?1, ?2, ?3)")
            .bind(id)
            .bind(first_name)
            .bind(last_name)
            .execute(pool)
            .await?;
    }

    for (id, category_name) in CATEGORIES {
        sqlx::query("INSERT INTO categories (id, category_name) VALUES (?1, ?2)")
            .bind(id)
            .bind(category_name)
            .execute(pool)
            .await?;
    }

    for (id, product_name, price_cents, brand, category_id) in PRODUCTS {
        sqlx::query(
            "INSERT INTO products (id, product_name, price_cents, brand, category_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(id)
        .bind(product_name)
        .bind(price_cents)
        .bind(brand)
        .bind(category_id)
        .execute(pool)
        .await?;
    }

    for (id, cashier_id, (year, month, day)) in ORDERS {
        sqlx::query("INSERT INTO orders (id, cashier_id, paid_on_date) VALUES (?1, ?2, ?3)")
            .bind(id)
            .bind(cashier_id)
            .bind(midnight(*year, *month, *day))
            .execute(pool)
            .await?;
    }

    for (id, order_id, product_id, quantity) in ORDER_LINES {
        sqlx::query(
            "INSERT INTO order_lines (id, order_id, product_id, quantity)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(id)
        .bind(order_id)
        .bind(product_id)
        .bind(quantity)
        .execute(pool)
        .await?;
    }

    info!(
        cashiers = CASHIERS.len(),
        categories = CATEGORIES.len(),
        products = PRODUCTS.len(),
        orders = ORDERS.len(),
        order_lines = ORDER_LINES.len(),
        "Seed data inserted"
    );
    Ok(true)
}

fn midnight(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_seed_runs_once() {
        let db = Database::new(DbConfig::in_memory().seed(false)).await.unwrap();

        assert!(seed_if_empty(db.pool()).await.unwrap());
        assert!(!seed_if_empty(db.pool()).await.unwrap());

        let lines: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_lines")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(lines, ORDER_LINES.len() as i64);
    }

    #[test]
    fn test_fixture_dates_are_valid() {
        for (_, _, (year, month, day)) in ORDERS {
            assert!(midnight(*year, *month, *day).is_some());
        }
    }
}
