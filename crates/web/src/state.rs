use std::sync::Arc;

use galleria_backend::{build_http_client, BackendError, HalClient, ResetFanout};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Client for the gallery REST API.
    pub hal: HalClient,
    /// File services reset by `POST /reset`.
    pub reset: Arc<ResetFanout>,
}

impl AppState {
    /// Build the state and its outbound HTTP client from configuration.
    pub fn new(config: ServerConfig) -> Result<Self, BackendError> {
        let client = build_http_client(std::time::Duration::from_secs(
            config.backend_timeout_secs,
        ))?;
        let reset = ResetFanout::new(client.clone(), config.reset_targets.clone());

        Ok(Self {
            config: Arc::new(config),
            hal: HalClient::new(client),
            reset: Arc::new(reset),
        })
    }
}
