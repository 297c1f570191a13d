//! CRUD handlers for the product collection.
//!
//! Handlers raise typed failures ([`ApiError`]) and let the central
//! translator turn them into status/body pairs. Validation runs before any
//! store access, so a 400 takes precedence over a 404 on update.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::models::{NewProduct, Product, ProductPatch};
use crate::state::AppState;
use crate::validation::{validate_new_product, validate_patch};

fn product_not_found() -> ApiError {
    ApiError::NotFound("Product not found".to_string())
}

/// List the full collection in insertion order.
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store.list().await)
}

/// Get a single product by id.
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let product = state.store.get(&id).await.ok_or_else(product_not_found)?;
    Ok(Json(product))
}

/// Create a product. The id is generated server-side.
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewProduct>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    validate_new_product(&payload)?;

    let created = state.store.insert(payload).await;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a product by merging the patch over the stored record.
#[instrument(skip(state, patch))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<ProductPatch>,
) -> ApiResult<Json<Product>> {
    validate_patch(&patch)?;

    let updated = state
        .store
        .update(&id, patch)
        .await
        .ok_or_else(product_not_found)?;
    Ok(Json(updated))
}

/// Delete a product, returning the removed record.
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let removed = state
        .store
        .remove(&id)
        .await
        .ok_or_else(product_not_found)?;
    Ok(Json(removed))
}
