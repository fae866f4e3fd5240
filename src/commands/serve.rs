//! Serve command - Starts the HTTP server.

use std::future::Future;
use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, MemoryUserStore};

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }

    let app_state = if args.in_memory {
        tracing::warn!("Using in-memory user store; registrations are lost on exit");
        AppState::from_store(Arc::new(MemoryUserStore::new()))
    } else {
        let db = Database::connect(&config).await?;
        AppState::from_database(&db)
    };

    let app = create_router(app_state, &config.static_dir);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await
}

/// Resolve once `signal` fires. A signal source that fails never resolves.
async fn wait_for_shutdown<F, E>(signal: F)
where
    F: Future<Output = Result<(), E>>,
    E: std::fmt::Display,
{
    if let Err(e) = signal.await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal, stopping server...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_signal_stops_server() {
        let result = tokio::time::timeout(
            Duration::from_secs(1),
            wait_for_shutdown(async { Ok::<(), std::io::Error>(()) }),
        )
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_failed_signal_handler_keeps_serving() {
        let result = tokio::time::timeout(
            Duration::from_millis(50),
            wait_for_shutdown(async {
                Err::<(), _>(std::io::Error::new(std::io::ErrorKind::Other, "no signal"))
            }),
        )
        .await;
        assert!(result.is_err());
    }
}
