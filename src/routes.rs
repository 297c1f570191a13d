//! Application routing configuration with middleware stack.
//!
//! # Middleware Stack (applied in order)
//!
//! ```text
//! Request
//!    │
//!    ▼
//! ┌──────────────────┐
//! │  Request Logger  │ ← records every request, authorized or not
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │    Auth Gate     │ ← 403 if key invalid (bypassed for /health)
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │      CORS        │ ← Cross-origin headers
//! └────────┬─────────┘
//!          │
//!          ▼
//!      Handler
//! ```
//!
//! # Route Matching
//!
//! The literal paths `/api/products/filter`, `/search`, and `/stats` share a
//! prefix with the `/api/products/{id}` capture. Axum resolves literal
//! segments ahead of captures regardless of registration order, so the query
//! endpoints are always reachable and "filter" can never be read as an id.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::handlers;
use crate::middleware::{ApiKeyGate, RequestLogLayer};
use crate::state::AppState;

/// Build the application router with all routes and middleware configured.
pub fn build_router(state: AppState) -> Router {
    let config = &state.config;

    let cors = build_cors_layer(&config.cors_allowed_origins);

    let mut router = Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health))
        .route(
            "/api/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/api/products/filter", get(handlers::filter_products))
        .route("/api/products/search", get(handlers::search_products))
        .route("/api/products/stats", get(handlers::product_stats))
        .route(
            "/api/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        );

    // Middleware stack: applied bottom to top, so the logger added last
    // wraps everything and sees rejected requests too.
    router = router.layer(DefaultBodyLimit::max(config.max_request_body_size));
    router = router.layer(cors);

    router = router.layer(ApiKeyGate::new(
        config.api_key.clone(),
        config.auth_bypass_paths.clone(),
    ));
    if config.using_default_key() {
        info!("API key authentication using the development default; set API_KEY to override");
    } else {
        info!("API key authentication enabled");
    }

    router = router.layer(RequestLogLayer::new());

    router.with_state(state)
}

/// Build CORS layer from configuration.
///
/// Using `*` (any origin) is convenient for development but should be
/// avoided in production. Specify explicit origins instead.
fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_any = allowed_origins.iter().any(|o| o == "*");

    if allow_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cors_layer_any() {
        let origins = vec!["*".to_string()];
        let _layer = build_cors_layer(&origins);
        // Just verify it doesn't panic
    }

    #[test]
    fn test_build_cors_layer_specific() {
        let origins = vec!["https://shop.example.com".to_string()];
        let _layer = build_cors_layer(&origins);
        // Just verify it doesn't panic
    }
}
