//! Shared application state for Axum handlers.
//!
//! Cloned per request; the store and config are behind `Arc`s, so clones
//! are cheap and all handlers observe the same collection. There are no
//! background tasks: every operation completes synchronously against
//! memory within its own request.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::store::ProductStore;

/// Shared application state for Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory product collection
    pub store: ProductStore,
    /// Application configuration
    pub config: Arc<Config>,
    /// Timestamp when the application started
    pub started_at: Instant,
}

impl AppState {
    /// Create application state from a store and configuration.
    pub fn new(store: ProductStore, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// Get the application uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_shares_one_store_across_clones() {
        let state = AppState::new(ProductStore::seeded(), Config::default());
        let clone = state.clone();

        let _ = state.store.remove("1").await;

        assert_eq!(clone.store.count().await, 2);
    }
}
