//! Category endpoints.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use cornerstore_core::{CategoryDto, NewCategory};

use super::created;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub category_name: String,
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<CategoryDto>>> {
    let categories = state.db.categories().list().await?;
    info!(count = categories.len(), "Listed categories");
    Ok(Json(categories.into_iter().map(CategoryDto::from).collect()))
}

/// `GET /api/categories/{id}`: the category with its products.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<CategoryDto>> {
    let graph = state
        .db
        .categories()
        .get_with_products(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Category", id))?;
    info!(id, "Fetched category");

    Ok(Json(CategoryDto::from(graph)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> ApiResult<Response> {
    let category = state
        .db
        .categories()
        .insert(&NewCategory {
            category_name: req.category_name,
        })
        .await?;
    info!(id = category.id, "Category created");

    Ok(created("categories", category.id, CategoryDto::from(category)))
}
