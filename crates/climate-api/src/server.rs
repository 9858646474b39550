//! HTTP serve loop with graceful shutdown.

use axum::Router;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Errors from binding or running the listener.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("invalid listen address: {0}")]
    InvalidAddress(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Bind and serve the router until the token is cancelled.
pub async fn serve(
    host: &str,
    port: u16,
    router: Router,
    shutdown: CancellationToken,
) -> Result<(), ServeError> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|_| ServeError::InvalidAddress(format!("{host}:{port}")))?;

    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!(%local_addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            info!("HTTP server received shutdown signal");
        })
        .await?;

    info!("HTTP server shutdown complete");
    Ok(())
}
