use std::net::SocketAddr;
use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use product_api::{AppState, Config, ProductStore, build_router, utils};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Product API v{}", env!("CARGO_PKG_VERSION"));

    match run().await {
        Ok(()) => ExitCode::from(exitcode::OK as u8),
        Err(exit_code) => ExitCode::from(exit_code as u8),
    }
}

/// Run the application, returning an exit code on error.
async fn run() -> Result<(), exitcode::ExitCode> {
    // Load configuration
    let config = Config::from_env().map_err(|e| {
        error!("Configuration error: {e}");
        exitcode::CONFIG
    })?;
    info!(
        host = %config.host,
        port = %config.port,
        "Configuration loaded"
    );
    if config.using_default_key() {
        warn!("API_KEY not set; using the development default key");
    }

    // Build application state and router
    let state = AppState::new(ProductStore::seeded(), config.clone());
    info!(products = state.store.count().await, "Store seeded");
    let app = build_router(state);

    // Start server
    let addr: SocketAddr = config.server_addr().parse().map_err(|e| {
        error!("Invalid server address: {e}");
        exitcode::CONFIG
    })?;
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind to {addr}: {e}");
        exitcode::UNAVAILABLE
    })?;

    info!("Server listening on http://{addr}");
    info!("API endpoints:");
    info!("  GET    /                       - Welcome message");
    info!("  GET    /health                 - Health check (no auth)");
    info!("  GET    /api/products           - List all products");
    info!("  POST   /api/products           - Create a product");
    info!("  GET    /api/products/{{id}}      - Get a product");
    info!("  PUT    /api/products/{{id}}      - Update a product");
    info!("  DELETE /api/products/{{id}}      - Delete a product");
    info!("  GET    /api/products/filter    - Filter with pagination");
    info!("  GET    /api/products/search    - Search by name");
    info!("  GET    /api/products/stats     - Category counts");

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown_signal())
        .await
        .map_err(|e| {
            error!("Server error: {e}");
            exitcode::SOFTWARE
        })?;

    info!("Server shutdown complete");
    Ok(())
}
