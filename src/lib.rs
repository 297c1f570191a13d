//! # Product API
//!
//! A small product-catalog REST service built on Axum, featuring:
//!
//! - **CRUD**: create, read, update (merge semantics), delete over an
//!   in-memory ordered collection
//! - **Queries**: category filter with pagination, case-insensitive name
//!   search, per-category stats
//! - **Security**: static API-key authentication with constant-time
//!   comparison
//! - **Observability**: request logging, structured tracing, health endpoint
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Axum HTTP Server                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Middleware (Request Logger → API Key Gate)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Handlers (products CRUD, filter/search/stats, health)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ProductStore (ordered Vec behind an async RwLock)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use product_api::{AppState, Config, ProductStore, build_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::default();
//!     let state = AppState::new(ProductStore::seeded(), config);
//!     let app = build_router(state);
//!
//!     // Start the server...
//! }
//! ```
//!
//! ## Security Configuration
//!
//! Override the development API key:
//! ```bash
//! API_KEY=your-secret-key cargo run
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;
pub mod validation;

// Re-exports for convenience
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use routes::build_router;
pub use state::AppState;
pub use store::ProductStore;
