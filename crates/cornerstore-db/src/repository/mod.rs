//! # Repository Module
//!
//! Database repository implementations for CornerStore.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Handler                                                               │
//! │       │                                                                 │
//! │       │  db.orders().get_with_lines(1)                                 │
//! │       ▼                                                                 │
//! │  OrderRepository                                                       │
//! │  ├── get_by_id(&self, id)          → Order                             │
//! │  ├── get_with_lines(&self, id)     → OrderGraph                        │
//! │  ├── insert(&self, order)                                              │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each query variant names the graph it loads. The mapper in
//! `cornerstore-core` never loads anything, so what a response contains is
//! decided here.
//!
//! ## Available Repositories
//!
//! - [`CashierRepository`](cashier::CashierRepository) - Cashiers and their order history
//! - [`CategoryRepository`](category::CategoryRepository) - Categories and their products
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and search
//! - [`OrderRepository`](order::OrderRepository) - Orders, lines and date filtering

pub mod cashier;
pub mod category;
pub mod order;
pub mod product;
