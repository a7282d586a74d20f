//! Product endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use cornerstore_core::{Money, NewProduct, ProductDto};

use super::created;
use crate::error::ApiResult;
use crate::AppState;

/// Body of both `POST /api/products` and `PUT /api/products/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub product_name: String,
    pub price: Money,
    pub brand: String,
    pub category_id: i64,
}

impl From<ProductRequest> for NewProduct {
    fn from(req: ProductRequest) -> Self {
        NewProduct {
            product_name: req.product_name,
            price: req.price,
            brand: req.brand,
            category_id: req.category_id,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductListParams {
    pub search: Option<String>,
}

/// `GET /api/products?search=`: products with their category, optionally
/// filtered on product or category name.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> ApiResult<Json<Vec<ProductDto>>> {
    let repo = state.db.products();
    let products = match params.search.as_deref() {
        Some(term) => repo.search_with_category(term).await?,
        None => repo.list_with_category().await?,
    };
    info!(count = products.len(), "Listed products");

    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// `POST /api/products`
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> ApiResult<Response> {
    let product = state.db.products().insert(&req.into()).await?;
    info!(id = product.id, "Product created");

    Ok(created("products", product.id, ProductDto::from(product)))
}

/// `PUT /api/products/{id}`: overwrite every field, 204 on success.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ProductRequest>,
) -> ApiResult<StatusCode> {
    state.db.products().update(id, &req.into()).await?;
    info!(id, "Product updated");

    Ok(StatusCode::NO_CONTENT)
}
