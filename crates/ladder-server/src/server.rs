//! HTTP server lifecycle.

use crate::error::ServerError;
use crate::routes;
use crate::state::AppState;
use ladder_adapter_pg::Database;
use ladder_core::ServerConfig;
use tokio::net::TcpListener;

/// The ladder web server.
pub struct LadderServer {
    config: ServerConfig,
    database: Database,
}

impl LadderServer {
    pub fn new(config: ServerConfig, database: Database) -> Self {
        Self { config, database }
    }

    /// Serve until SIGINT or SIGTERM, then drain the connection pool.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = TcpListener::bind(&self.config.bind)
            .await
            .map_err(|e| ServerError::StartupFailed(format!("bind {}: {e}", self.config.bind)))?;
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Starting ladder server");

        let app = routes::create_router(AppState::new(self.database.clone()));
        axum::serve(listener, app)
            .with_graceful_shutdown(wait_for_signal())
            .await?;

        tracing::info!("Server stopped, closing connection pool");
        self.database.close(self.config.shutdown_grace()).await;
        Ok(())
    }
}

/// Wait for `SIGTERM` or `SIGINT`.
#[cfg(unix)]
pub async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let (mut term, mut int) = match (
        signal(SignalKind::terminate()),
        signal(SignalKind::interrupt()),
    ) {
        (Ok(term), Ok(int)) => (term, int),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(error = %e, "Failed to register signal handlers, using ctrl-c");
            interrupt_or_pending(tokio::signal::ctrl_c()).await;
            return;
        }
    };

    tokio::select! {
        _ = term.recv() => tracing::info!("Received SIGTERM"),
        _ = int.recv() => tracing::info!("Received SIGINT"),
    }
}

/// Wait for `ctrl+c`.
#[cfg(not(unix))]
pub async fn wait_for_signal() {
    interrupt_or_pending(tokio::signal::ctrl_c()).await;
}

/// Resolve when `interrupt` fires. If listening fails, never resolve, so the
/// server keeps serving instead of shutting down on the error.
async fn interrupt_or_pending(interrupt: impl Future<Output = std::io::Result<()>>) {
    match interrupt.await {
        Ok(()) => tracing::info!("Received SIGINT"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for ctrl-c, shutdown signals ignored");
            std::future::pending::<()>().await;
        }
    }
}
