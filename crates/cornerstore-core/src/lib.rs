//! # cornerstore-core: Pure Domain Logic for CornerStore
//!
//! Entities, money arithmetic and the projection of loaded entity graphs into
//! the transfer objects served by the API. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      CornerStore Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/api (axum handlers)                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ cornerstore-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  entity   │  │   money   │  │ transfer  │  │   date    │  │   │
//! │  │   │ rows and  │  │   Money   │  │   DTOs +  │  │ parsing + │  │   │
//! │  │   │  graphs   │  │  (cents)  │  │ projection│  │ day range │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               cornerstore-db (Database Layer)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`entity`] - Table rows, insert payloads and loaded graphs
//! - [`money`] - Money type with integer arithmetic
//! - [`transfer`] - Transfer objects and entity → transfer projections
//! - [`date`] - Payment timestamp parsing and calendar-day bounds
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cornerstore_core::{Cashier, CashierDto};
//!
//! let cashier = Cashier {
//!     id: 1,
//!     first_name: "Lana".to_string(),
//!     last_name: "Lopez".to_string(),
//! };
//! let dto = CashierDto::from(cashier);
//! assert_eq!(dto.full_name, "Lana Lopez");
//! ```

pub mod date;
pub mod entity;
pub mod error;
pub mod money;
pub mod transfer;

pub use entity::*;
pub use error::ValidationError;
pub use money::Money;
pub use transfer::{CashierDto, CategoryDto, OrderDto, OrderLineDto, ProductDto};
