use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// Request body for creating a product. All fields are required; the id is
/// always generated server-side and never accepted from the client.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub in_stock: bool,
}

/// Request body for updating a product.
///
/// Merge semantics: fields present in the request overwrite the stored
/// record, absent fields are preserved. An empty patch is a valid no-op.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

impl ProductPatch {
    /// Apply this patch over an existing record. The id is never touched.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
    }
}

/// Default page number for the filter endpoint (1-indexed).
pub const DEFAULT_PAGE: usize = 1;

/// Default page size for the filter endpoint.
pub const DEFAULT_LIMIT: usize = 10;

/// Query parameters for `GET /api/products/filter`.
///
/// Paging values are taken as raw strings so that non-numeric input falls
/// back to the defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub category: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

impl FilterParams {
    /// Effective page number: 1-indexed, defaulting on missing, non-numeric,
    /// or sub-1 values.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|s| s.parse().ok())
            .filter(|&n| n >= 1)
            .unwrap_or(DEFAULT_PAGE)
    }

    /// Effective page size, defaulting on missing or non-numeric values.
    /// An explicit `limit=0` is honored and yields an empty slice.
    pub fn limit(&self) -> usize {
        self.limit
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_LIMIT)
    }
}

/// Query parameters for `GET /api/products/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

/// Response for the filter endpoint: one page of the post-filter collection.
///
/// `total` counts all records surviving the category filter, before the
/// page slice is taken.
#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub page: usize,
    pub total: usize,
    pub products: Vec<Product>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
}
