//! In-memory product store.
//!
//! The collection is an ordered `Vec`: order reflects insertion, and every
//! lookup is a linear scan, which is the right trade at catalog sizes this
//! service is meant for. All access goes through an async `RwLock` so that
//! reads share and writes are serialized across the multi-threaded runtime.
//!
//! The store is owned explicitly and handed to handlers through
//! [`crate::state::AppState`]; tests build a fresh one per case instead of
//! touching process-wide state.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{NewProduct, Product, ProductPatch, seed_products};

/// Shared, ordered collection of products. Cheap to clone.
#[derive(Clone)]
pub struct ProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductStore {
    /// Create a store holding the given records, preserving their order.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Create a store seeded with the three startup records.
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    /// Create an empty store.
    pub fn empty() -> Self {
        Self::with_products(Vec::new())
    }

    /// Snapshot of the full collection in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    /// Number of records currently stored.
    pub async fn count(&self) -> usize {
        self.products.read().await.len()
    }

    /// Find a product by id.
    pub async fn get(&self, id: &str) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Append a new product with a freshly generated id.
    pub async fn insert(&self, new: NewProduct) -> Product {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            in_stock: new.in_stock,
        };

        self.products.write().await.push(product.clone());
        product
    }

    /// Merge a patch into the product with the given id.
    ///
    /// Returns the updated record, or `None` if the id is unknown. The id
    /// itself is never altered.
    pub async fn update(&self, id: &str, patch: ProductPatch) -> Option<Product> {
        let mut products = self.products.write().await;
        let product = products.iter_mut().find(|p| p.id == id)?;
        patch.apply(product);
        Some(product.clone())
    }

    /// Remove the product with the given id, keeping the order of the rest.
    ///
    /// Returns the removed record, or `None` if the id is unknown.
    pub async fn remove(&self, id: &str) -> Option<Product> {
        let mut products = self.products.write().await;
        let position = products.iter().position(|p| p.id == id)?;
        Some(products.remove(position))
    }

    /// One page of the collection after an optional category filter.
    ///
    /// Returns the post-filter total alongside the 1-indexed page slice.
    /// Pages past the end yield an empty slice, not an error.
    pub async fn page(
        &self,
        category: Option<&str>,
        page: usize,
        limit: usize,
    ) -> (usize, Vec<Product>) {
        let products = self.products.read().await;

        let filtered: Vec<&Product> = products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .collect();
        let total = filtered.len();

        let start = page.saturating_sub(1).saturating_mul(limit);
        let slice = filtered
            .into_iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();

        (total, slice)
    }

    /// Case-insensitive substring match against product names.
    pub async fn search(&self, needle: &str) -> Vec<Product> {
        let needle = needle.to_lowercase();
        self.products
            .read()
            .await
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Count of products per category over the full collection.
    pub async fn stats(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for product in self.products.read().await.iter() {
            *counts.entry(product.category.clone()).or_insert(0) += 1;
        }
        counts
    }
}
