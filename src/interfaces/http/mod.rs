//! JSON-over-HTTP surface of the receipt processor.
//!
//! - `POST /receipts/process` accepts a receipt and returns `{"id": ...}`.
//! - `GET /receipts/:id/points` returns `{"points": ...}`.
//!
//! Failures are rendered as `{"error": ...}` with the status code chosen by
//! [`error`].

pub mod error;
pub mod routes;

pub use routes::{AppState, router};

use std::net::SocketAddr;
use tracing::info;

/// Binds `addr` and serves `router` until Ctrl-C is received.
pub async fn serve(addr: SocketAddr, app: axum::Router) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
