//! Gateway service - lifecycle around the axum server.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::info;

use autopost_broadcast::MessageSender;
use autopost_store::{KeyValueStore, StateRepository};

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::handlers::AppState;
use crate::router::build_router;

/// Owns the gateway's shared state and the HTTP serve loop.
///
/// Store and sender are injected; their lifecycle belongs to the caller
/// building the service, not to ambient process state.
pub struct GatewayService {
    config: GatewayConfig,
    state: AppState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl GatewayService {
    /// Create a new gateway service.
    pub fn new(
        config: GatewayConfig,
        store: Box<dyn KeyValueStore>,
        sender: Arc<dyn MessageSender>,
    ) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        let state = AppState {
            config: Arc::new(config.clone()),
            repository: Arc::new(Mutex::new(StateRepository::new(store))),
            sender,
        };

        Ok(Self {
            config,
            state,
            shutdown_tx: None,
        })
    }

    /// Shared application state (for in-process router tests).
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Bind and serve until shutdown is requested.
    pub async fn start(&mut self) -> Result<(), GatewayError> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let router = build_router(self.state.clone());
        let addr = self.config.bind_addr();

        info!(addr = %addr, "starting gateway");
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(e.to_string()))?;

        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .map_err(|e| GatewayError::Server(e.to_string()))?;

        info!("gateway stopped");
        Ok(())
    }

    /// Trigger graceful shutdown.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
