//! HTTP API server shell.
//!
//! A thin axum wrapper around the expander core: one endpoint,
//! `/api/expand?url=...`, with permissive CORS headers on every response and
//! an OPTIONS preflight that returns success with no body.

mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::expand::Expander;

pub use handlers::ExpandQuery;

/// Builds the API router for the given expander.
pub fn router(expander: Arc<Expander>) -> Router {
    Router::new()
        .route(
            "/api/expand",
            get(handlers::expand_handler).options(handlers::preflight_handler),
        )
        .with_state(expander)
}

/// Binds and runs the API server until the process is stopped.
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails while
/// running.
pub async fn start_server(port: u16, expander: Arc<Expander>) -> Result<(), anyhow::Error> {
    let app = router(expander);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to port {}: {}", port, e))?;

    log::info!("URL expander API listening on http://0.0.0.0:{}/", port);
    log::info!("  - Expand: http://localhost:{}/api/expand?url=<URL>", port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}
