//! # Transfer Objects
//!
//! The JSON shapes returned at the API boundary, and the pure projections
//! that build them from rows and loaded graphs.
//!
//! ## Projection Depth
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Source                    Projection                                  │
//! │  ──────────────────────    ─────────────────────────────────────────── │
//! │  Cashier                   CashierDto   (shallow)                      │
//! │  CashierGraph              CashierDto { orders: [OrderDto {           │
//! │                                orderProducts: [OrderLineDto {          │
//! │                                    product: ProductDto }] }] }         │
//! │  Order                     OrderDto     (shallow, total 0)             │
//! │  OrderGraph                OrderDto { cashier: CashierDto (shallow),   │
//! │                                orderProducts: [...], total }           │
//! │  Product / ProductGraph    ProductDto { category: CategoryDto          │
//! │                                (shallow) }                             │
//! │  Category / CategoryGraph  CategoryDto { products: [ProductDto         │
//! │                                (shallow)] }                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here loads data. What is nested depends only on what the caller
//! put in the graph, and absent associations are left out of the JSON.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::date;
use crate::entity::{
    Cashier, CashierGraph, Category, CategoryGraph, Order, OrderGraph, OrderLine, OrderLineGraph,
    Product, ProductGraph,
};
use crate::money::Money;

// =============================================================================
// Transfer Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryDto {
    pub id: i64,
    pub category_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductDto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDto {
    pub id: i64,
    pub product_name: String,
    #[ts(type = "number")]
    pub price: Money,
    pub brand: String,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CashierDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Always `first_name + " " + last_name`.
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<OrderDto>>,
}

/// One line of an order. Serialized inside `orderProducts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLineDto {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderDto {
    pub id: i64,
    pub cashier_id: i64,
    #[serde(default, with = "date::paid_on_date")]
    #[ts(as = "Option<String>")]
    pub paid_on_date: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cashier: Option<CashierDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_products: Option<Vec<OrderLineDto>>,
    /// Sum of price × quantity over the loaded lines.
    #[ts(type = "number")]
    pub total: Money,
}

// =============================================================================
// Category
// =============================================================================

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        CategoryDto {
            id: c.id,
            category_name: c.category_name,
            products: None,
        }
    }
}

impl From<CategoryGraph> for CategoryDto {
    fn from(graph: CategoryGraph) -> Self {
        CategoryDto {
            products: graph
                .products
                .map(|products| products.into_iter().map(ProductDto::from).collect()),
            ..CategoryDto::from(graph.category)
        }
    }
}

// =============================================================================
// Product
// =============================================================================

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            price: p.price(),
            product_name: p.product_name,
            brand: p.brand,
            category_id: p.category_id,
            category: None,
        }
    }
}

impl From<ProductGraph> for ProductDto {
    fn from(graph: ProductGraph) -> Self {
        ProductDto {
            category: graph.category.map(CategoryDto::from),
            ..ProductDto::from(graph.product)
        }
    }
}

// =============================================================================
// Cashier
// =============================================================================

impl From<Cashier> for CashierDto {
    fn from(c: Cashier) -> Self {
        CashierDto {
            id: c.id,
            full_name: c.full_name(),
            first_name: c.first_name,
            last_name: c.last_name,
            orders: None,
        }
    }
}

impl From<CashierGraph> for CashierDto {
    fn from(graph: CashierGraph) -> Self {
        CashierDto {
            orders: graph
                .orders
                .map(|orders| orders.into_iter().map(OrderDto::from).collect()),
            ..CashierDto::from(graph.cashier)
        }
    }
}

// =============================================================================
// Order
// =============================================================================

impl From<OrderLine> for OrderLineDto {
    fn from(l: OrderLine) -> Self {
        OrderLineDto {
            id: l.id,
            order_id: l.order_id,
            product_id: l.product_id,
            quantity: l.quantity,
            product: None,
        }
    }
}

impl From<OrderLineGraph> for OrderLineDto {
    fn from(graph: OrderLineGraph) -> Self {
        OrderLineDto {
            product: graph.product.map(ProductDto::from),
            ..OrderLineDto::from(graph.line)
        }
    }
}

impl From<Order> for OrderDto {
    fn from(o: Order) -> Self {
        OrderDto::from(OrderGraph::shallow(o))
    }
}

impl From<OrderGraph> for OrderDto {
    fn from(graph: OrderGraph) -> Self {
        // Computed before the lines are moved out of the graph.
        let total = graph.total();
        OrderDto {
            id: graph.order.id,
            cashier_id: graph.order.cashier_id,
            paid_on_date: graph.order.paid_on_date,
            cashier: graph.cashier.map(CashierDto::from),
            order_products: graph
                .lines
                .map(|lines| lines.into_iter().map(OrderLineDto::from).collect()),
            total,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
