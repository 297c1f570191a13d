//! Read-only query handlers: filter/pagination, name search, category stats.
//!
//! These live on literal paths under `/api/products/`, which the router
//! matches ahead of the `{id}` capture.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::error::{ApiError, ApiResult};
use crate::models::{FilterParams, FilterResponse, Product, SearchParams};
use crate::state::AppState;

/// Optional category filter plus 1-indexed pagination.
///
/// `total` is the post-filter, pre-pagination count; pages past the end
/// yield an empty slice rather than an error.
#[instrument(skip(state))]
pub async fn filter_products(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Json<FilterResponse> {
    let page = params.page();
    let limit = params.limit();

    let (total, products) = state
        .store
        .page(params.category.as_deref(), page, limit)
        .await;

    Json(FilterResponse {
        page,
        total,
        products,
    })
}

/// Case-insensitive substring search over product names.
#[instrument(skip(state))]
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Product>>> {
    let name = params.name.as_deref().ok_or_else(|| {
        ApiError::Validation("name query parameter is required".to_string())
    })?;

    Ok(Json(state.store.search(name).await))
}

/// Count of products per category over the full collection.
#[instrument(skip(state))]
pub async fn product_stats(State(state): State<AppState>) -> Json<BTreeMap<String, usize>> {
    Json(state.store.stats().await)
}
