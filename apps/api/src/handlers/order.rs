//! Order endpoints.
//!
//! Creating an order writes the order row, then one row per requested line,
//! each as its own statement, and finally re-reads the full graph for the
//! response.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::info;

use cornerstore_core::date::{self, day_bounds, parse_calendar_day};
use cornerstore_core::{NewOrder, NewOrderLine, OrderDto};

use super::created;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub cashier_id: i64,

    #[serde(default, with = "date::paid_on_date")]
    pub paid_on_date: Option<NaiveDateTime>,

    /// Omitted or `null` means no lines.
    #[serde(default)]
    pub order_products: Option<Vec<OrderLineRequest>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub product_id: i64,
    pub quantity: i64,
}

impl From<OrderLineRequest> for NewOrderLine {
    fn from(req: OrderLineRequest) -> Self {
        NewOrderLine {
            product_id: req.product_id,
            quantity: req.quantity,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListParams {
    pub order_date: Option<String>,
}

/// `GET /api/orders?orderDate=YYYY-MM-DD`: shallow orders, optionally only
/// those paid on one calendar day.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> ApiResult<Json<Vec<OrderDto>>> {
    let repo = state.db.orders();

    let orders = match params.order_date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            let day = parse_calendar_day("orderDate", raw)?;
            let (start, end) = day_bounds(day)?;
            repo.list_paid_between(start, end).await?
        }
        _ => repo.list().await?,
    };
    info!(count = orders.len(), "Listed orders");

    Ok(Json(orders.into_iter().map(OrderDto::from).collect()))
}

/// `GET /api/orders/{id}`: the order with cashier, lines, products and
/// categories.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<OrderDto>> {
    let graph = state
        .db
        .orders()
        .get_with_lines(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order", id))?;
    info!(id, "Fetched order");

    Ok(Json(OrderDto::from(graph)))
}

/// `POST /api/orders`
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<Response> {
    let repo = state.db.orders();

    let order = repo
        .insert(&NewOrder {
            cashier_id: req.cashier_id,
            paid_on_date: req.paid_on_date,
        })
        .await?;

    let lines = req.order_products.unwrap_or_default();
    for line in &lines {
        repo.add_line(order.id, NewOrderLine::from(*line)).await?;
    }

    let graph = repo
        .get_with_lines(order.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order", order.id))?;

    info!(id = order.id, lines = lines.len(), "Order created");
    Ok(created("orders", order.id, OrderDto::from(graph)))
}

/// `DELETE /api/orders/{id}`: 204 on success; lines go with the order.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.db.orders().delete(id).await?;
    info!(id, "Order deleted");

    Ok(StatusCode::NO_CONTENT)
}
