// server/mod.rs — fixed-port HTTP server for the embedded bundle.
//
// Single catch-all route; every request goes through the static handler.

pub mod static_files;

use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Fixed serving port.
pub const PORT: u16 = 3000;

/// Base URL handed to the browser launcher.
pub fn base_url() -> String {
    format!("http://localhost:{PORT}")
}

pub fn build_router() -> Router {
    Router::new()
        .fallback(static_files::serve)
        .layer(TraceLayer::new_for_http())
}

/// Bind the fixed port and serve until the process is terminated.
///
/// A bind failure (port taken, insufficient privilege) propagates to the
/// caller and is fatal; there is no retry.
pub async fn run() -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    let router = build_router();

    info!("Listening on http://localhost:{PORT}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind port {PORT}"))?;
    axum::serve(listener, router)
        .await
        .context("HTTP server terminated")?;
    Ok(())
}
