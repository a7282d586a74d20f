//! # Entities and Loaded Graphs
//!
//! Row types mirror the five tables one to one. Graph types describe exactly
//! which associations a query loaded alongside a row.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Entities                                      │
//! │                                                                         │
//! │  Cashier 1───* Order 1───* OrderLine *───1 Product *───1 Category      │
//! │                                                                         │
//! │                        Loaded Graphs                                    │
//! │                                                                         │
//! │  CashierGraph  = Cashier  + Option<Vec<OrderGraph>>                    │
//! │  OrderGraph    = Order    + Option<Cashier> + Option<Vec<OrderLineGraph>>│
//! │  OrderLineGraph= OrderLine+ Option<ProductGraph>                       │
//! │  ProductGraph  = Product  + Option<Category>                           │
//! │  CategoryGraph = Category + Option<Vec<Product>>                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why plain rows at the leaves?
//! A graph never embeds a graph of the entity that owns it: an order's
//! cashier is a bare `Cashier`, a product's category is a bare `Category`,
//! a category's products are bare `Product`s. Cycles cannot be expressed.
//!
//! `None` means "not loaded", never "loaded and empty".

use chrono::NaiveDateTime;

use crate::money::Money;

// =============================================================================
// Rows
// =============================================================================

/// A product grouping (Beverages, Snacks, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub category_name: String,
}

/// A product on the shelf.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    /// Price in cents (smallest currency unit).
    pub price_cents: i64,
    pub brand: String,
    pub category_id: i64,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// A person ringing up orders.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Cashier {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl Cashier {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An order rung up by a cashier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub cashier_id: i64,
    /// When the order was paid (no timezone). `None` while unpaid.
    pub paid_on_date: Option<NaiveDateTime>,
}

/// A product and quantity on an order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

// =============================================================================
// Inserts
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub category_name: String,
}

/// Product fields written by both create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub product_name: String,
    pub price: Money,
    pub brand: String,
    pub category_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCashier {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub cashier_id: i64,
    pub paid_on_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderLine {
    pub product_id: i64,
    pub quantity: i64,
}

// =============================================================================
// Loaded Graphs
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGraph {
    pub category: Category,
    pub products: Option<Vec<Product>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGraph {
    pub product: Product,
    pub category: Option<Category>,
}

impl ProductGraph {
    /// Case-insensitive substring match on the product name or, when loaded,
    /// the category name. `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.product.product_name.to_lowercase().contains(needle)
            || self
                .category
                .as_ref()
                .is_some_and(|c| c.category_name.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineGraph {
    pub line: OrderLine,
    pub product: Option<ProductGraph>,
}

impl OrderLineGraph {
    /// Price × quantity, or zero when the product was not loaded.
    pub fn line_total(&self) -> Money {
        self.product
            .as_ref()
            .map(|p| p.product.price().multiply_quantity(self.line.quantity))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderGraph {
    pub order: Order,
    pub cashier: Option<Cashier>,
    pub lines: Option<Vec<OrderLineGraph>>,
}

impl OrderGraph {
    /// A bare order with nothing loaded around it.
    pub fn shallow(order: Order) -> Self {
        OrderGraph {
            order,
            cashier: None,
            lines: None,
        }
    }

    /// Sum of line totals; zero when lines were not loaded or there are none.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .flatten()
            .map(OrderLineGraph::line_total)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashierGraph {
    pub cashier: Cashier,
    pub orders: Option<Vec<OrderGraph>>,
}
