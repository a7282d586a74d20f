//! # HTTP Handlers
//!
//! One module per resource. Each handler resolves its inputs, calls one named
//! repository query, maps the loaded graph into transfer objects and applies
//! the not-found rule.
//!
//! ## Route Table
//! ```text
//! GET    /api/cashiers           cashier::list
//! POST   /api/cashiers           cashier::create
//! GET    /api/cashiers/{id}      cashier::get
//! GET    /api/categories         category::list
//! POST   /api/categories         category::create
//! GET    /api/categories/{id}    category::get
//! GET    /api/products?search=   product::list
//! POST   /api/products           product::create
//! PUT    /api/products/{id}      product::update
//! GET    /api/orders?orderDate=  order::list
//! POST   /api/orders             order::create
//! GET    /api/orders/{id}        order::get
//! DELETE /api/orders/{id}        order::delete
//! GET    /api/health             health::check
//! ```

pub mod cashier;
pub mod category;
pub mod health;
pub mod order;
pub mod product;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// 201 Created with a `Location` header pointing at the new resource.
pub(crate) fn created<T: Serialize>(collection: &str, id: i64, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/{collection}/{id}"))],
        Json(body),
    )
        .into_response()
}
