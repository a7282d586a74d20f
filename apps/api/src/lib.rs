//! # CornerStore API
//!
//! HTTP/JSON server for the CornerStore inventory and point-of-sale records.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         API Request Flow                                │
//! │                                                                         │
//! │  Client ──► axum Router (/api) ──► handler ──► repository ──► SQLite   │
//! │                  │                    │                                 │
//! │             TraceLayer                ▼                                 │
//! │          (request spans)     graph ──► transfer object ──► JSON         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `CORNERSTORE_HOST` - Interface to bind (default: 0.0.0.0)
//! - `CORNERSTORE_PORT` - HTTP port (default: 5000)
//! - `CORNERSTORE_DB_PATH` - SQLite file (default: ./cornerstore.db)
//! - `CORNERSTORE_DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `CORNERSTORE_SEED` - Seed an empty store (default: true)
//! - `RUST_LOG` - Log filter (default: info,cornerstore=debug,sqlx=warn)

pub mod config;
pub mod error;
pub mod handlers;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use cornerstore_db::Database;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorCode};

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}

/// Builds the application router with every route mounted under `/api`.
pub fn router(state: AppState) -> Router {
    use handlers::{cashier, category, health, order, product};

    let api = Router::new()
        .route("/cashiers", get(cashier::list).post(cashier::create))
        .route("/cashiers/{id}", get(cashier::get))
        .route("/categories", get(category::list).post(category::create))
        .route("/categories/{id}", get(category::get))
        .route("/products", get(product::list).post(product::create))
        .route("/products/{id}", axum::routing::put(product::update))
        .route("/orders", get(order::list).post(order::create))
        .route("/orders/{id}", get(order::get).delete(order::delete))
        .route("/health", get(health::check));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
