use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tracing::info;

use crate::connector::api::Container;

use super::handlers::{create_result, health};

/// Build the application router. Separate from [`serve`] so tests can drive
/// it without binding a socket.
pub fn app(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/api/result", post(create_result))
        .route("/health", get(health))
        .with_state(container)
}

pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(
        "Listening on http://{} ({} mode)",
        listener.local_addr()?,
        container.mode()
    );

    axum::serve(listener, app(container))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
