//! Server setup and lifecycle management.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use twin_cognition::{GenerativeArchitect, OllamaTransport};

use crate::api::{create_router, AppState};
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};

/// Twin daemon server.
pub struct Server {
    config: DaemonConfig,
    state: AppState,
}

impl Server {
    /// Create a new server with the given configuration.
    ///
    /// A failing model backend never prevents startup: the daemon
    /// swaps in an always-unavailable architect and keeps serving,
    /// reporting `llm_available: false` on the root endpoint.
    pub fn new(config: DaemonConfig) -> Self {
        let timeout = Duration::from_secs(config.model.timeout_secs);

        let (architect, llm_available) =
            match OllamaTransport::new(&config.model.endpoint, &config.model.model) {
                Ok(transport) => (
                    GenerativeArchitect::new(Arc::new(transport)).with_timeout(timeout),
                    true,
                ),
                Err(err) => {
                    tracing::warn!(error = %err, "generation backend unavailable at startup");
                    (GenerativeArchitect::unavailable(err.to_string()), false)
                }
            };

        let state = AppState::new(Arc::new(architect), llm_available);

        Self { config, state }
    }

    /// Run the server until shutdown.
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;
        let app = create_router(self.state);

        let listener = TcpListener::bind(addr).await?;

        tracing::info!("twin daemon listening on {}", addr);
        tracing::info!(
            model = %self.config.model.model,
            endpoint = %self.config.model.endpoint,
            "generation backend configured"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("twin daemon shutting down");
        Ok(())
    }
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl+C handler");
    }
}
