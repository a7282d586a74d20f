//! Cashier endpoints.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use cornerstore_core::{CashierDto, NewCashier};

use super::created;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCashierRequest {
    pub first_name: String,
    pub last_name: String,
}

impl From<CreateCashierRequest> for NewCashier {
    fn from(req: CreateCashierRequest) -> Self {
        NewCashier {
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

/// `GET /api/cashiers`: every cashier, without orders.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<CashierDto>>> {
    let cashiers = state.db.cashiers().list().await?;
    info!(count = cashiers.len(), "Listed cashiers");
    Ok(Json(cashiers.into_iter().map(CashierDto::from).collect()))
}

/// `GET /api/cashiers/{id}`: the cashier with orders, lines and products.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<CashierDto>> {
    let graph = state
        .db
        .cashiers()
        .get_with_orders(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Cashier", id))?;
    info!(id, orders = graph.orders.as_ref().map_or(0, Vec::len), "Fetched cashier");

    Ok(Json(CashierDto::from(graph)))
}

/// `POST /api/cashiers`
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateCashierRequest>,
) -> ApiResult<Response> {
    let cashier = state.db.cashiers().insert(&req.into()).await?;
    info!(id = cashier.id, "Cashier created");

    Ok(created("cashiers", cashier.id, CashierDto::from(cashier)))
}
